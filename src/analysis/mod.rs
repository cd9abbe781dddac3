//! Savings calculations
//!
//! This module contains the pure calculation logic for:
//! - Metadata automation savings
//! - Code reuse savings

pub mod constants;
pub mod metadata;
pub mod reuse;

// Re-export analysis functions for convenience
pub use metadata::{calculate_metadata_savings, HorizonSavings, MetadataSavings};
pub use reuse::{calculate_reuse_savings, RateSavings, ReuseSavings};

use crate::scenario::Scenario;

/// All computed results for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsReport {
    pub metadata: MetadataSavings,
    pub reuse: Option<ReuseSavings>,
}

/// Runs every calculation a scenario asks for.
pub fn calculate_savings(scenario: &Scenario) -> SavingsReport {
    SavingsReport {
        metadata: calculate_metadata_savings(
            scenario.repositories,
            &scenario.automation,
            &scenario.horizons,
        ),
        reuse: scenario.reuse.as_ref().map(calculate_reuse_savings),
    }
}
