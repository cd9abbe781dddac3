//! Unit constants for savings calculations
//!
//! Provides the time and currency scale constants used throughout the analysis modules.

/// Minutes in one hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Default discount applied to theoretical reuse savings
pub const DEFAULT_EFFICIENCY_FACTOR: f64 = 0.8;

/// Million constant (1,000,000 dollars)
pub const MILLION: u64 = 1000 * 1000;

/// Million constant as f64 (1,000,000.0 dollars)
pub const MILLION_F64: f64 = MILLION as f64;
