use argh::FromArgs;
use repo_savings_analysis::scenario::{load_scenario, ScenarioSelection};
use repo_savings_analysis::{run_scenario, AnalysisError, OutputOptions};
use std::path::PathBuf;

/// Savings projections for repository metadata automation and code reuse
#[derive(FromArgs, Debug)]
pub struct Args {
    /// scenario to render: metadata, reuse, reuse-real or all (default: all)
    #[argh(option, short = 's', default = "ScenarioSelection::All")]
    scenario: ScenarioSelection,

    /// directory where images and reports are written (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// load scenario parameters from a JSON file; overrides --scenario
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// do not write the text report next to each image
    #[argh(switch)]
    no_report: bool,
}

fn main() -> Result<(), AnalysisError> {
    let args: Args = argh::from_env();

    let scenarios = match &args.config {
        Some(path) => vec![load_scenario(path)?],
        None => args.scenario.scenarios(),
    };

    let options = OutputOptions {
        plots: true,
        analysis: !args.no_report,
    };

    for scenario in &scenarios {
        let (_, lines) = run_scenario(scenario, &args.output_dir, options)?;
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
