//! Row types and ASCII table formatting for savings reports
//!
//! This module provides shared functionality for the tabular text report:
//! - [`HorizonRow`] and [`ReuseRow`] for representing result series with formatted values
//! - ASCII table formatting using the [`tabled`] crate

use super::format::{format_amount, format_rate_label, format_thousands};
use crate::analysis::{HorizonSavings, RateSavings};
use tabled::{Table, Tabled};

/// Represents the metadata savings for one projection horizon
#[derive(Debug, Clone, Tabled)]
pub struct HorizonRow {
    #[tabled(rename = "Years")]
    pub years: u32,
    #[tabled(rename = "Hours Saved")]
    pub hours_saved: String,
    #[tabled(rename = "Cost Saved")]
    pub cost_saved: String,
}

impl From<&HorizonSavings> for HorizonRow {
    fn from(savings: &HorizonSavings) -> Self {
        Self {
            years: savings.years,
            hours_saved: format_thousands(savings.hours_saved),
            cost_saved: format!("${}", format_thousands(savings.cost_saved)),
        }
    }
}

/// Represents the reuse savings at one reuse rate
#[derive(Debug, Clone, Tabled)]
pub struct ReuseRow {
    #[tabled(rename = "Reuse Rate")]
    pub rate: String,
    #[tabled(rename = "Savings")]
    pub saved: String,
}

impl From<&RateSavings> for ReuseRow {
    fn from(savings: &RateSavings) -> Self {
        Self {
            rate: format_rate_label(savings.rate),
            saved: format!("${}", format_amount(savings.saved)),
        }
    }
}

/// Formats rows as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `rows` - The rows to format
/// * `title` - Optional title, underlined with `=`
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_table<T: Tabled>(rows: &[T], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No data available".to_string();
    }

    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}
