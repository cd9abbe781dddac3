//! Code reuse savings
//!
//! Applies each reuse rate to the annual spend base, discounted by the efficiency factor.
//! Results are kept as unrounded floating point, unlike the whole hours/dollars of the
//! metadata projection.

use crate::scenario::ReuseEconomics;

/// Savings at a single reuse rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSavings {
    pub rate: f64,
    pub saved: f64,
}

/// Result of [`calculate_reuse_savings`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReuseSavings {
    /// The spend base every rate was applied to.
    pub annual_spend: f64,
    /// One entry per rate, in input order.
    pub rates: Vec<RateSavings>,
}

impl ReuseSavings {
    pub fn saved(&self) -> Vec<f64> {
        self.rates.iter().map(|r| r.saved).collect()
    }
}

/// Calculate potential savings from code reuse
///
/// `saved = annual_spend * rate * efficiency` for every rate.
pub fn calculate_reuse_savings(economics: &ReuseEconomics) -> ReuseSavings {
    let annual_spend = economics.spend_base.annual_spend();
    let rates = economics
        .rates
        .iter()
        .map(|&rate| RateSavings {
            rate,
            saved: annual_spend * rate * economics.efficiency,
        })
        .collect();

    ReuseSavings {
        annual_spend,
        rates,
    }
}
