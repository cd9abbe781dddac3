//! Savings report rendering
//!
//! Turns a [`SavingsReport`] into its three outputs:
//! - a multi-panel bar chart PNG ([`generate_savings_plots`])
//! - a plain-text tabular report next to it ([`generate_savings_analysis`])
//! - console summary lines ([`summary_lines`])

use crate::analysis::SavingsReport;
use crate::common::format::{format_amount, format_rate_label, format_thousands};
use crate::common::plots::{create_bar_figure, AxisFormat, BarPanel};
use crate::common::tables::{format_table, HorizonRow, ReuseRow};
use crate::common::PlotError;
use crate::scenario::{Scenario, SpendBase};
use plotters::style::RGBColor;
use std::fs;
use std::path::{Path, PathBuf};

/// Bar colour of the hours panel
const HOURS_COLOR: RGBColor = RGBColor(0, 0, 255);

/// Bar colour of the metadata cost panel
const COST_COLOR: RGBColor = RGBColor(0, 128, 0);

/// Bar colour of the reuse panel
const REUSE_COLOR: RGBColor = RGBColor(128, 0, 128);

/// Errors that can occur while writing a report
#[derive(Debug)]
pub enum ReportError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            ReportError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::FileWrite(err)
    }
}

impl From<PlotError> for ReportError {
    fn from(err: PlotError) -> Self {
        ReportError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, ReportError>;

/// Builds the chart panels for a report, left to right
///
/// Hours and cost per horizon always come first; the reuse panel is appended only when the
/// scenario has reuse economics.
pub fn build_panels(scenario: &Scenario, report: &SavingsReport) -> Vec<BarPanel> {
    let years: Vec<String> = report
        .metadata
        .horizons
        .iter()
        .map(|h| h.years.to_string())
        .collect();

    let mut panels = vec![
        BarPanel {
            title: scenario.labels.hours_title.clone(),
            x_label: "Years".to_string(),
            y_label: "Hours Saved".to_string(),
            categories: years.clone(),
            values: report
                .metadata
                .horizons
                .iter()
                .map(|h| h.hours_saved as f64)
                .collect(),
            color: HOURS_COLOR,
            y_format: AxisFormat::Plain,
        },
        BarPanel {
            title: scenario.labels.cost_title.clone(),
            x_label: "Years".to_string(),
            y_label: "Dollars Saved ($)".to_string(),
            categories: years,
            values: report
                .metadata
                .horizons
                .iter()
                .map(|h| h.cost_saved as f64)
                .collect(),
            color: COST_COLOR,
            y_format: AxisFormat::Millions,
        },
    ];

    if let Some(reuse) = &report.reuse {
        panels.push(BarPanel {
            title: scenario.labels.reuse_title.clone(),
            x_label: "Reuse Percentage".to_string(),
            y_label: "Dollars Saved ($)".to_string(),
            categories: reuse.rates.iter().map(|r| format_rate_label(r.rate)).collect(),
            values: reuse.saved(),
            color: REUSE_COLOR,
            y_format: AxisFormat::Millions,
        });
    }

    panels
}

/// Console summary of a report, one entry per output line
///
/// The first line is blank, separating consecutive scenarios.
pub fn summary_lines(scenario: &Scenario, report: &SavingsReport) -> Vec<String> {
    let mut lines = vec![String::new(), scenario.labels.metadata_heading.clone()];

    for horizon in &report.metadata.horizons {
        lines.push(format!(
            "{} Year(s): {} hours (${})",
            horizon.years,
            format_thousands(horizon.hours_saved),
            format_thousands(horizon.cost_saved)
        ));
    }

    if let (Some(economics), Some(reuse)) = (&scenario.reuse, &report.reuse) {
        lines.push(String::new());
        lines.push("Code Reuse Potential Savings:".to_string());
        lines.push(match economics.spend_base {
            SpendBase::Projects { .. } => {
                format!("Annual IT Spend: ${}", format_amount(reuse.annual_spend))
            }
            SpendBase::Budget { .. } => format!(
                "Based on ${} development budget:",
                format_amount(reuse.annual_spend)
            ),
        });

        for rate in &reuse.rates {
            lines.push(format!(
                "At {} reuse: ${}",
                format_rate_label(rate.rate),
                format_amount(rate.saved)
            ));
        }
    }

    lines
}

/// Builds the plain-text report: result tables followed by the inputs behind them.
pub fn format_analysis(scenario: &Scenario, report: &SavingsReport) -> String {
    let title = format!("Savings Analysis: {}", scenario.name);
    let mut output = format!("{}\n{}\n\n", title, "=".repeat(title.len()));

    let horizon_rows: Vec<HorizonRow> = report
        .metadata
        .horizons
        .iter()
        .map(HorizonRow::from)
        .collect();
    output.push_str(&format_table(
        &horizon_rows,
        Some("Metadata Automation Savings"),
    ));
    output.push_str("\n\n");

    if let Some(reuse) = &report.reuse {
        let reuse_rows: Vec<ReuseRow> = reuse.rates.iter().map(ReuseRow::from).collect();
        output.push_str(&format_table(&reuse_rows, Some("Code Reuse Savings")));
        output.push_str("\n\n");
    }

    let automation = &scenario.automation;
    output.push_str("Summary\n");
    output.push_str(&"=".repeat(7));
    output.push('\n');
    output.push_str(&format!(
        "Repositories: {}\n",
        format_thousands(scenario.repositories as i64)
    ));
    output.push_str(&format!(
        "Automated share: {:.1}%\n",
        automation.automated_fraction * 100.0
    ));
    output.push_str(&format!(
        "Manual process: {} hours/year\n",
        format_amount(report.metadata.baseline_hours)
    ));
    output.push_str(&format!(
        "Automated process: {} hours/year\n",
        format_amount(report.metadata.new_process_hours)
    ));
    output.push_str(&format!(
        "Hourly rate: ${}\n",
        format_amount(automation.hourly_rate)
    ));

    if let (Some(economics), Some(reuse)) = (&scenario.reuse, &report.reuse) {
        match economics.spend_base {
            SpendBase::Projects {
                avg_project_cost,
                num_projects,
            } => output.push_str(&format!(
                "Reuse spend base: ${} ({} projects at ${})\n",
                format_amount(reuse.annual_spend),
                num_projects,
                format_amount(avg_project_cost)
            )),
            SpendBase::Budget {
                annual_it_spend, ..
            } => {
                output.push_str(&format!(
                    "Reuse spend base: ${} development budget\n",
                    format_amount(reuse.annual_spend)
                ));
                if let Some(it_spend) = annual_it_spend {
                    output.push_str(&format!(
                        "Budget share of ${} IT spend: {:.1}%\n",
                        format_amount(it_spend),
                        reuse.annual_spend / it_spend * 100.0
                    ));
                }
            }
        }
        output.push_str(&format!("Efficiency factor: {:.2}\n", economics.efficiency));
    }

    output
}

/// Path of the text report that accompanies a scenario's image.
pub fn analysis_path(scenario: &Scenario, output_dir: &Path) -> PathBuf {
    output_dir.join(&scenario.output_file).with_extension("txt")
}

/// Generate the savings bar chart
///
/// Creates the figure described by the scenario and saves it to
/// `<output_dir>/<output_file>`, overwriting any existing file.
///
/// # Arguments
/// * `scenario` - Scenario the report was computed from
/// * `report` - Computed savings
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written image
/// * `Err(ReportError)` - If plot generation failed
pub fn generate_savings_plots(
    scenario: &Scenario,
    report: &SavingsReport,
    output_dir: &Path,
) -> Result<PathBuf> {
    let output_path = output_dir.join(&scenario.output_file);
    let panels = build_panels(scenario, report);
    create_bar_figure(&panels, &scenario.figure(), &output_path)?;
    Ok(output_path)
}

/// Generate the text report
///
/// Writes [`format_analysis`] output next to the image, with a `.txt` extension.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written report
/// * `Err(ReportError)` - If file operations failed
pub fn generate_savings_analysis(
    scenario: &Scenario,
    report: &SavingsReport,
    output_dir: &Path,
) -> Result<PathBuf> {
    let output_path = analysis_path(scenario, output_dir);
    fs::write(&output_path, format_analysis(scenario, report))?;
    Ok(output_path)
}
