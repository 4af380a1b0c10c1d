//! run a set of scenario configs side by side to see which stage dominates
//! under each one

use glob::glob;
use log::info;

use crate::accelerator::SystemModel;
use crate::error::LabResult;
use crate::lab_result::PipelineResult;
use crate::settings::Settings;

#[derive(Debug)]
pub struct ScenarioOutcome {
    pub label: String,
    pub settings: Settings,
    pub result: PipelineResult,
    pub simulation_time: String,
}

/// build a fresh model from `settings`, generate its input and run it once
pub fn run_scenario(label: &str, settings: Settings) -> LabResult<ScenarioOutcome> {
    let start_time = std::time::Instant::now();
    let system = SystemModel::new(&settings)?;
    let (matrix, vector) = system.make_input();
    let result = system.run_pipeline(&matrix, &vector)?;
    info!("scenario {}: bottleneck {}", label, result.bottleneck.stage);
    Ok(ScenarioOutcome {
        label: label.to_string(),
        settings,
        result,
        simulation_time: format!("{:?}", start_time.elapsed()),
    })
}

/// # Description
/// - every file matching `pattern` is layered over `base_paths` and run as an
///   independent scenario, labelled by its file stem
/// - `adjust` runs on each loaded scenario before it is validated and run, the
///   binary uses it for command line overrides
/// - outcomes come back in path order
pub fn run_scenarios<S, F>(
    base_paths: &[S],
    pattern: &str,
    adjust: F,
) -> LabResult<Vec<ScenarioOutcome>>
where
    S: AsRef<str>,
    F: Fn(&mut Settings),
{
    let mut outcomes = vec![];
    for entry in glob(pattern)? {
        let path = entry?;
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut config_names: Vec<String> =
            base_paths.iter().map(|p| p.as_ref().to_string()).collect();
        config_names.push(path.to_string_lossy().into_owned());

        let mut settings = Settings::new(&config_names)?;
        adjust(&mut settings);
        outcomes.push(run_scenario(&label, settings)?);
    }
    Ok(outcomes)
}
