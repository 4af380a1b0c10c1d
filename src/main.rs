use accel_lab::{
    cmd_args::Args,
    report::{render_comparison, render_text},
    sweep::run_scenarios,
    LabReport, Settings, SystemModel,
};
use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use std::{io, path::Path};

const DEFAULT_CONFIG: &str = "configs/default.toml";

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Some(generator) = args.generator {
        let mut cmd = Args::command();
        eprintln!("Generating completion file for {:?}...", generator);
        print_completions(generator, &mut cmd);
        return Ok(());
    }
    let level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level)?;
    let start_time = std::time::Instant::now();

    let mut config_names = vec![];
    if Path::new(DEFAULT_CONFIG).exists() {
        config_names.push(DEFAULT_CONFIG.to_string());
    }
    config_names.extend(args.config_names.iter().cloned());

    if let Some(pattern) = &args.sweep {
        let outcomes = run_scenarios(&config_names, pattern, |settings| args.apply(settings))?;
        if args.json {
            let reports: Vec<_> = outcomes
                .into_iter()
                .map(|outcome| {
                    let mut report = LabReport::new(outcome.settings, outcome.result);
                    report.simulation_time = outcome.simulation_time;
                    report
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            print!("{}", render_comparison(&outcomes));
        }
        return Ok(());
    }

    let mut settings = Settings::new(&config_names)?;
    args.apply(&mut settings);
    let system = SystemModel::new(&settings)?;

    let (matrix, vector) = system.make_input();
    let result = system.run_pipeline(&matrix, &vector)?;

    if args.json {
        let mut report = LabReport::new(settings, result);
        report.simulation_time = format!("{:?}", start_time.elapsed());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&settings, &result));
    }
    Ok(())
}
