//! # Repository Savings Analysis
//!
//! Projects the time and cost saved by automating repository metadata generation, and the
//! savings potential of code reuse, then renders the results as bar charts, a text report
//! and console summaries.
//!
//! The pipeline is: [`scenario::Scenario`] → [`analysis::calculate_savings`] →
//! [`report`] outputs. [`run_scenario`] performs all steps for one scenario.

use std::path::Path;
use thiserror::Error;

/// Pure savings calculations.
pub mod analysis;

/// Formatting, tables and plotting shared by the reports.
pub mod common;

/// Chart, text report and console output for computed savings.
pub mod report;

/// Scenario parameters, presets and JSON loading.
pub mod scenario;

use analysis::{calculate_savings, SavingsReport};
use report::{generate_savings_analysis, generate_savings_plots, summary_lines};
use scenario::Scenario;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Scenario error: {0}")]
    Scenario(#[from] scenario::ScenarioError),

    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

/// Options controlling which outputs [`run_scenario`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Write the image.
    pub plots: bool,
    /// Write the `.txt` report next to the image.
    pub analysis: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            plots: true,
            analysis: true,
        }
    }
}

/// Computes and renders a single scenario
///
/// Writes the requested files into `output_dir` and returns the computed savings along
/// with the console summary lines. Nothing is printed to stdout here; status messages go
/// to stderr.
///
/// # Arguments
/// * `scenario` - The scenario to analyze
/// * `output_dir` - Directory where the image and text report are written
/// * `options` - Which files to write
///
/// # Returns
/// * `Ok((SavingsReport, Vec<String>))` - Computed savings and summary lines
/// * `Err(AnalysisError)` - If writing any output failed
pub fn run_scenario(
    scenario: &Scenario,
    output_dir: &Path,
    options: OutputOptions,
) -> Result<(SavingsReport, Vec<String>)> {
    let report = calculate_savings(scenario);

    if options.plots {
        eprintln!("📊 Rendering {} ({})", scenario.name, scenario.output_file);
        let path = generate_savings_plots(scenario, &report, output_dir)?;
        eprintln!("   ✅ Saved plot: {}", path.display());
    }

    if options.analysis {
        let path = generate_savings_analysis(scenario, &report, output_dir)?;
        eprintln!("   ✅ Saved report: {}", path.display());
    }

    let lines = summary_lines(scenario, &report);
    Ok((report, lines))
}
