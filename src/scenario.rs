//! Scenario parameters for savings projections
//!
//! A [`Scenario`] bundles every input of one analysis run: repository volume, automation
//! economics, projection horizons, optional reuse economics and presentation settings.
//! The three built-in presets are available through [`ScenarioPreset`]; custom scenarios
//! can be loaded from JSON with [`load_scenario`].

use crate::analysis::constants::DEFAULT_EFFICIENCY_FACTOR;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while resolving a scenario
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse scenario JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unknown scenario '{0}', expected one of: metadata, reuse, reuse-real, all")]
    UnknownPreset(String),
}

type Result<T> = core::result::Result<T, ScenarioError>;

/// Per-repository processing economics before and after automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationEconomics {
    /// Fraction of repositories handled by automation (0.0 - 1.0).
    pub automated_fraction: f64,

    /// Minutes per repository in the original, fully manual process.
    pub manual_minutes: f64,

    /// Minutes per repository when processed by automation.
    pub automated_minutes: f64,

    /// Minutes per repository for the manual portion left after automation.
    pub residual_minutes: f64,

    /// Labour cost per hour, in dollars.
    pub hourly_rate: f64,
}

/// The annual amount reuse rates are applied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpendBase {
    /// Yearly spend derived from a number of new projects at an average cost.
    Projects {
        avg_project_cost: f64,
        num_projects: u32,
    },

    /// A fixed development budget.
    Budget {
        amount: f64,
        /// Total IT spend the budget is carved out of. Only used for reporting.
        #[serde(default)]
        annual_it_spend: Option<f64>,
    },
}

impl SpendBase {
    /// Annual spend reuse savings are computed against.
    pub fn annual_spend(&self) -> f64 {
        match self {
            SpendBase::Projects {
                avg_project_cost,
                num_projects,
            } => avg_project_cost * *num_projects as f64,
            SpendBase::Budget { amount, .. } => *amount,
        }
    }
}

/// Code reuse economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReuseEconomics {
    pub spend_base: SpendBase,

    /// Fractions of the spend base assumed recoverable through reuse.
    pub rates: Vec<f64>,

    /// Discount for reuse implementation overhead.
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
}

fn default_efficiency() -> f64 {
    DEFAULT_EFFICIENCY_FACTOR
}

/// Physical size of the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSettings {
    pub width_inches: f64,
    pub height_inches: f64,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_dpi() -> u32 {
    300
}

impl FigureSettings {
    /// Pixel dimensions of the figure at the configured DPI.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_inches * dpi).round() as u32,
            (self.height_inches * dpi).round() as u32,
        )
    }

    /// Converts a font size in points to pixels at the configured DPI.
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }
}

/// Panel titles and console headings. These differ between the presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioLabels {
    pub hours_title: String,
    pub cost_title: String,
    pub reuse_title: String,
    pub metadata_heading: String,
}

impl Default for ScenarioLabels {
    fn default() -> Self {
        Self {
            hours_title: "Time Saved by Period".to_string(),
            cost_title: "Cost Savings by Period".to_string(),
            reuse_title: "Code Reuse Savings".to_string(),
            metadata_heading: "Calculated Savings:".to_string(),
        }
    }
}

/// Complete input of one savings analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short name used in status output.
    pub name: String,

    /// File name of the rendered image, relative to the output directory.
    pub output_file: String,

    /// Number of repositories needing metadata.
    pub repositories: u64,

    pub automation: AutomationEconomics,

    /// Projection periods, in years.
    pub horizons: Vec<u32>,

    #[serde(default)]
    pub reuse: Option<ReuseEconomics>,

    /// Explicit figure size. When absent, see [`Scenario::figure`].
    #[serde(default)]
    pub figure: Option<FigureSettings>,

    #[serde(default)]
    pub labels: ScenarioLabels,
}

impl Scenario {
    /// Resolved figure size: explicit settings, else 8x3 inches (12x3 with a reuse panel).
    pub fn figure(&self) -> FigureSettings {
        self.figure.unwrap_or(FigureSettings {
            width_inches: if self.reuse.is_some() { 12.0 } else { 8.0 },
            height_inches: 3.0,
            dpi: default_dpi(),
        })
    }

    /// Metadata automation only; two panels.
    pub fn metadata() -> Self {
        Self {
            name: "metadata".to_string(),
            output_file: "combined_savings_plots.png".to_string(),
            repositories: 10_000,
            automation: default_automation(),
            horizons: vec![1, 5, 10],
            reuse: None,
            figure: Some(FigureSettings {
                width_inches: 8.0,
                height_inches: 3.0,
                dpi: 300,
            }),
            labels: ScenarioLabels::default(),
        }
    }

    /// Metadata automation plus reuse over a portfolio of new projects.
    pub fn reuse() -> Self {
        Self {
            name: "reuse".to_string(),
            output_file: "combined_savings_reuse_plots.png".to_string(),
            repositories: 10_000,
            automation: default_automation(),
            horizons: vec![1, 5, 10],
            reuse: Some(ReuseEconomics {
                spend_base: SpendBase::Projects {
                    avg_project_cost: 1_000_000.0,
                    num_projects: 100,
                },
                rates: vec![0.10, 0.25, 0.50],
                efficiency: DEFAULT_EFFICIENCY_FACTOR,
            }),
            figure: Some(FigureSettings {
                width_inches: 12.0,
                height_inches: 3.0,
                dpi: 300,
            }),
            labels: ScenarioLabels {
                hours_title: "Metadata: Time Saved by Period".to_string(),
                cost_title: "Metadata: Cost Savings".to_string(),
                reuse_title: "Code Reuse Savings".to_string(),
                metadata_heading: "Metadata Automation Savings:".to_string(),
            },
        }
    }

    /// Metadata automation plus reuse against the actual development budget.
    pub fn reuse_real() -> Self {
        Self {
            name: "reuse-real".to_string(),
            output_file: "reuse_savings_analysis_real.png".to_string(),
            repositories: 10_000,
            automation: default_automation(),
            horizons: vec![1, 5, 10],
            reuse: Some(ReuseEconomics {
                // $700M development budget, 25% of the $2.8B annual IT spend.
                spend_base: SpendBase::Budget {
                    amount: 700_000_000.0,
                    annual_it_spend: Some(2_800_000_000.0),
                },
                rates: vec![0.01, 0.05, 0.10],
                efficiency: DEFAULT_EFFICIENCY_FACTOR,
            }),
            figure: Some(FigureSettings {
                width_inches: 15.0,
                height_inches: 4.0,
                dpi: 300,
            }),
            labels: ScenarioLabels {
                hours_title: "Metadata Automation: Time Saved for Reuse".to_string(),
                cost_title: "Metadata Automation: Cost Savings for Reuse".to_string(),
                reuse_title: "Annual Code Reuse Savings Potential".to_string(),
                metadata_heading: "Metadata Automation Savings:".to_string(),
            },
        }
    }
}

fn default_automation() -> AutomationEconomics {
    AutomationEconomics {
        automated_fraction: 0.80,
        manual_minutes: 60.0,
        automated_minutes: 2.0,
        residual_minutes: 10.0,
        hourly_rate: 80.0,
    }
}

/// Built-in scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioPreset {
    Metadata,
    Reuse,
    ReuseReal,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 3] = [
        ScenarioPreset::Metadata,
        ScenarioPreset::Reuse,
        ScenarioPreset::ReuseReal,
    ];

    pub fn scenario(self) -> Scenario {
        match self {
            ScenarioPreset::Metadata => Scenario::metadata(),
            ScenarioPreset::Reuse => Scenario::reuse(),
            ScenarioPreset::ReuseReal => Scenario::reuse_real(),
        }
    }
}

/// Which presets a run renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioSelection {
    All,
    Single(ScenarioPreset),
}

impl ScenarioSelection {
    /// Scenarios in render order.
    pub fn scenarios(self) -> Vec<Scenario> {
        match self {
            ScenarioSelection::All => ScenarioPreset::ALL.iter().map(|p| p.scenario()).collect(),
            ScenarioSelection::Single(preset) => vec![preset.scenario()],
        }
    }
}

impl FromStr for ScenarioSelection {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ScenarioSelection::All),
            "metadata" => Ok(ScenarioSelection::Single(ScenarioPreset::Metadata)),
            "reuse" => Ok(ScenarioSelection::Single(ScenarioPreset::Reuse)),
            "reuse-real" | "reuse_real" => Ok(ScenarioSelection::Single(ScenarioPreset::ReuseReal)),
            _ => Err(ScenarioError::UnknownPreset(s.to_string())),
        }
    }
}

/// Load a scenario from a JSON file
///
/// # Arguments
/// * `file_path` - Path to a JSON document describing a [`Scenario`]
///
/// # Returns
/// * `Ok(Scenario)` - The parsed scenario
/// * `Err(ScenarioError)` - If the file could not be read or parsed
pub fn load_scenario(file_path: &Path) -> Result<Scenario> {
    let file = File::open(file_path)?;
    let scenario: Scenario = serde_json::from_reader(BufReader::new(file))?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest(input, expected,
        case("all", ScenarioSelection::All),
        case("metadata", ScenarioSelection::Single(ScenarioPreset::Metadata)),
        case("Reuse", ScenarioSelection::Single(ScenarioPreset::Reuse)),
        case("reuse-real", ScenarioSelection::Single(ScenarioPreset::ReuseReal)),
        case("reuse_real", ScenarioSelection::Single(ScenarioPreset::ReuseReal))
    )]
    fn parses_scenario_selection(input: &str, expected: ScenarioSelection) {
        assert_eq!(input.parse::<ScenarioSelection>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_selection() {
        let result = "everything".parse::<ScenarioSelection>();
        assert!(matches!(result, Err(ScenarioError::UnknownPreset(_))));
    }

    #[test]
    fn all_selection_keeps_preset_order() {
        let names: Vec<String> = ScenarioSelection::All
            .scenarios()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["metadata", "reuse", "reuse-real"]);
    }

    #[rstest]
    #[case::projects(
        SpendBase::Projects {
            avg_project_cost: 1_000_000.0,
            num_projects: 100
        },
        100_000_000.0
    )]
    #[case::budget(
        SpendBase::Budget {
            amount: 700_000_000.0,
            annual_it_spend: None
        },
        700_000_000.0
    )]
    fn annual_spend_follows_spend_base(#[case] spend_base: SpendBase, #[case] expected: f64) {
        assert_eq!(spend_base.annual_spend(), expected);
    }

    #[test]
    fn figure_pixel_size_at_300_dpi() {
        let figure = Scenario::metadata().figure();
        assert_eq!(figure.pixel_size(), (2400, 900));
        assert_eq!(figure.points_to_pixels(9.0), 37.5);
    }

    #[test]
    fn figure_defaults_depend_on_reuse_panel() {
        let mut scenario = Scenario::reuse();
        scenario.figure = None;
        assert_eq!(scenario.figure().width_inches, 12.0);

        scenario.reuse = None;
        assert_eq!(scenario.figure().width_inches, 8.0);
        assert_eq!(scenario.figure().dpi, 300);
    }

    #[test]
    fn loads_scenario_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "custom",
                "output_file": "custom.png",
                "repositories": 500,
                "automation": {{
                    "automated_fraction": 0.5,
                    "manual_minutes": 30,
                    "automated_minutes": 1,
                    "residual_minutes": 5,
                    "hourly_rate": 100
                }},
                "horizons": [1, 2],
                "reuse": {{
                    "spend_base": {{ "type": "budget", "amount": 1000000 }},
                    "rates": [0.2]
                }}
            }}"#
        )
        .unwrap();

        let scenario = load_scenario(file.path()).unwrap();
        assert_eq!(scenario.name, "custom");
        assert_eq!(scenario.repositories, 500);
        assert_eq!(scenario.horizons, vec![1, 2]);
        assert_eq!(scenario.labels, ScenarioLabels::default());
        assert!(scenario.figure.is_none());

        let reuse = scenario.reuse.unwrap();
        assert_eq!(reuse.efficiency, DEFAULT_EFFICIENCY_FACTOR);
        assert_eq!(
            reuse.spend_base,
            SpendBase::Budget {
                amount: 1_000_000.0,
                annual_it_spend: None
            }
        );
    }

    #[test]
    fn saved_preset_loads_back_unchanged() {
        let preset = Scenario::reuse_real();
        let file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer_pretty(file.as_file(), &preset).unwrap();

        assert_eq!(load_scenario(file.path()).unwrap(), preset);
    }

    #[test]
    fn load_scenario_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = load_scenario(file.path());
        assert!(matches!(result, Err(ScenarioError::JsonParse(_))));
    }

    #[test]
    fn load_scenario_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_scenario(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ScenarioError::FileRead(_))));
    }
}
