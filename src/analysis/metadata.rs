//! Metadata automation savings
//!
//! Compares the fully manual metadata process against the automated one and projects the
//! difference over each horizon.

use super::constants::MINUTES_PER_HOUR;
use crate::scenario::AutomationEconomics;

/// Savings for a single projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizonSavings {
    pub years: u32,
    /// Whole hours saved, truncated toward zero.
    pub hours_saved: i64,
    /// Whole dollars saved, truncated toward zero.
    pub cost_saved: i64,
}

/// Result of [`calculate_metadata_savings`].
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataSavings {
    /// Yearly hours spent by the original manual process.
    pub baseline_hours: f64,
    /// Yearly hours spent after automation.
    pub new_process_hours: f64,
    /// One entry per horizon, in input order.
    pub horizons: Vec<HorizonSavings>,
}

impl MetadataSavings {
    pub fn hours_saved(&self) -> Vec<i64> {
        self.horizons.iter().map(|h| h.hours_saved).collect()
    }

    pub fn cost_saved(&self) -> Vec<i64> {
        self.horizons.iter().map(|h| h.cost_saved).collect()
    }
}

/// Calculate time and cost savings for metadata automation
///
/// Hours saved per horizon are `(baseline - new) * years` truncated toward zero, and the
/// cost is those whole hours times the hourly rate, again truncated. Inputs are not
/// validated: a slower automated process produces negative savings and an empty horizon
/// list produces an empty series.
///
/// # Arguments
/// * `repositories` - Number of repositories processed per year
/// * `economics` - Per-repository processing times and hourly rate
/// * `horizons` - Projection periods in years
pub fn calculate_metadata_savings(
    repositories: u64,
    economics: &AutomationEconomics,
    horizons: &[u32],
) -> MetadataSavings {
    let repos = repositories as f64;

    // Original manual process time (in hours)
    let baseline_hours = (repos * economics.manual_minutes) / MINUTES_PER_HOUR;

    // New process time (in hours)
    let automated_repos = repos * economics.automated_fraction;
    let manual_repos = repos * (1.0 - economics.automated_fraction);
    let new_process_hours = (automated_repos * economics.automated_minutes
        + manual_repos * economics.residual_minutes)
        / MINUTES_PER_HOUR;

    let horizons = horizons
        .iter()
        .map(|&years| {
            let hours_saved = ((baseline_hours - new_process_hours) * years as f64) as i64;
            let cost_saved = (hours_saved as f64 * economics.hourly_rate) as i64;
            HorizonSavings {
                years,
                hours_saved,
                cost_saved,
            }
        })
        .collect();

    MetadataSavings {
        baseline_hours,
        new_process_hours,
        horizons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn economics() -> AutomationEconomics {
        AutomationEconomics {
            automated_fraction: 0.80,
            manual_minutes: 60.0,
            automated_minutes: 2.0,
            residual_minutes: 10.0,
            hourly_rate: 80.0,
        }
    }

    #[test]
    fn baseline_and_new_process_hours() {
        let savings = calculate_metadata_savings(10_000, &economics(), &[1]);
        assert_eq!(savings.baseline_hours, 10_000.0);
        assert!((savings.new_process_hours - 600.0).abs() < 1e-9);
    }

    #[rstest(years, hours, cost,
        case(1, 9_400, 752_000),
        case(5, 47_000, 3_760_000),
        case(10, 94_000, 7_520_000)
    )]
    fn savings_per_horizon(years: u32, hours: i64, cost: i64) {
        let savings = calculate_metadata_savings(10_000, &economics(), &[years]);
        assert_eq!(
            savings.horizons,
            vec![HorizonSavings {
                years,
                hours_saved: hours,
                cost_saved: cost
            }]
        );
    }

    #[test]
    fn keeps_horizon_order() {
        let savings = calculate_metadata_savings(10_000, &economics(), &[10, 1, 5]);
        assert_eq!(savings.hours_saved(), vec![94_000, 9_400, 47_000]);
        assert_eq!(savings.cost_saved(), vec![7_520_000, 752_000, 3_760_000]);
    }

    #[test]
    fn truncates_fractional_hours_toward_zero() {
        // 3 repos, 10 -> 0 minutes: 0.5 hours saved per year.
        let economics = AutomationEconomics {
            automated_fraction: 1.0,
            manual_minutes: 10.0,
            automated_minutes: 0.0,
            residual_minutes: 0.0,
            hourly_rate: 80.0,
        };
        let savings = calculate_metadata_savings(3, &economics, &[1, 3]);
        assert_eq!(savings.hours_saved(), vec![0, 1]);
        assert_eq!(savings.cost_saved(), vec![0, 80]);
    }

    #[test]
    fn slower_automation_yields_negative_savings() {
        let economics = AutomationEconomics {
            automated_fraction: 1.0,
            manual_minutes: 10.0,
            automated_minutes: 25.0,
            residual_minutes: 0.0,
            hourly_rate: 80.0,
        };
        // 60 repos: 10h baseline, 25h new; -15h per year.
        let savings = calculate_metadata_savings(60, &economics, &[1, 2]);
        assert_eq!(savings.hours_saved(), vec![-15, -30]);
        assert_eq!(savings.cost_saved(), vec![-1_200, -2_400]);
    }

    #[test]
    fn empty_horizons_yield_empty_series() {
        let savings = calculate_metadata_savings(10_000, &economics(), &[]);
        assert!(savings.horizons.is_empty());
        assert_eq!(savings.baseline_hours, 10_000.0);
    }

    #[test]
    fn fully_automated_uses_only_automated_time() {
        let mut economics = economics();
        economics.automated_fraction = 1.0;
        let savings = calculate_metadata_savings(10_000, &economics, &[1]);
        assert_eq!(savings.new_process_hours, 10_000.0 * 2.0 / 60.0);
    }

    #[test]
    fn no_automation_uses_only_residual_time() {
        let mut economics = economics();
        economics.automated_fraction = 0.0;
        let savings = calculate_metadata_savings(10_000, &economics, &[1]);
        assert_eq!(savings.new_process_hours, 10_000.0 * 10.0 / 60.0);

        // Residual equal to manual time leaves nothing to save.
        economics.residual_minutes = economics.manual_minutes;
        let savings = calculate_metadata_savings(10_000, &economics, &[1, 5]);
        assert_eq!(savings.hours_saved(), vec![0, 0]);
    }

    #[test]
    fn savings_are_monotonic_over_horizons() {
        let horizons: Vec<u32> = (1..=30).collect();
        let savings = calculate_metadata_savings(10_000, &economics(), &horizons);

        for pair in savings.horizons.windows(2) {
            assert!(pair[0].hours_saved <= pair[1].hours_saved);
            assert!(pair[0].cost_saved <= pair[1].cost_saved);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let first = calculate_metadata_savings(10_000, &economics(), &[1, 5, 10]);
        let second = calculate_metadata_savings(10_000, &economics(), &[1, 5, 10]);
        assert_eq!(first, second);
        assert_eq!(
            first.new_process_hours.to_bits(),
            second.new_process_hours.to_bits()
        );
    }
}
