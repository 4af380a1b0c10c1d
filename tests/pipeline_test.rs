use accel_lab::{
    accelerator::SimpleScheduler, report::render_comparison, sweep::run_scenarios, LabError,
    Settings, SystemModel,
};

fn init_logger() {
    simple_logger::init_with_level(log::Level::Info).unwrap_or(());
}

fn named_sum(result: &accel_lab::PipelineResult) -> f64 {
    result
        .latencies
        .entries()
        .iter()
        .filter(|(stage, _)| *stage != "total")
        .map(|(_, latency)| latency)
        .sum()
}

#[test]
fn test_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let settings = Settings::new(&["configs/default.toml"])?;
    let system = SystemModel::new(&settings)?;

    let matrix = vec![vec![1.0, 0.5], vec![0.0, 1.0]];
    let vector = vec![1.0, 2.0];
    let result = system.run_pipeline(&matrix, &vector)?;

    assert_eq!(result.matrix_output, vec![2.0, 2.0]);
    assert_eq!(result.dsp_output, vec![2.0, 2.0]);
    assert_eq!(result.plaintext_bytes_recovered, b"2.0000,2.0000".to_vec());
    assert!(result.shared_secret_match);
    assert!((result.latencies.total - named_sum(&result)).abs() < 1e-9);

    // 13 bytes over a 10 Mb/s link
    let rf = 2.0 + 13.0 * 8.0 / 10e6;
    assert!((result.latencies.rf - rf).abs() < 1e-12);
    assert_eq!(result.latencies.pqc_keygen, 0.2);
    assert_eq!(result.latencies.pqc_encapsulate, 0.1);
    assert_eq!(result.latencies.pqc_decapsulate, 0.1);
    assert_eq!(result.bottleneck.stage, "rf");
    assert_eq!(result.bottleneck.latency, result.latencies.rf);
    Ok(())
}

#[test]
fn test_generated_input_runs() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let mut settings = Settings::default();
    settings.system.matrix_size = 16;
    settings.system.dsp_window = 4;
    settings.system.seed = 7;
    let system = SystemModel::new(&settings)?;

    let (matrix, vector) = system.make_input();
    let result = system.run_pipeline(&matrix, &vector)?;
    assert_eq!(result.matrix_output.len(), 16);
    assert_eq!(result.dsp_output.len(), 16);
    assert!(result.shared_secret_match);
    assert!((result.latencies.total - named_sum(&result)).abs() < 1e-9);

    let bottleneck = SimpleScheduler::new().find_bottleneck(result.latencies.entries());
    assert_eq!(bottleneck, result.bottleneck);
    assert_ne!(bottleneck.stage, "total");
    Ok(())
}

#[test]
fn test_determinism_across_instances() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::default();
    settings.system.matrix_size = 5;
    settings.system.seed = 1234;
    let (m1, v1) = SystemModel::new(&settings)?.make_input();
    let (m2, v2) = SystemModel::new(&settings)?.make_input();
    // bit-identical, not just close
    let bits = |m: &Vec<Vec<f64>>, v: &Vec<f64>| -> Vec<u64> {
        m.iter().flatten().chain(v.iter()).map(|x| x.to_bits()).collect()
    };
    assert_eq!(bits(&m1, &v1), bits(&m2, &v2));
    Ok(())
}

#[test]
fn test_bad_bandwidth_is_rejected() {
    let mut settings = Settings::default();
    settings.system.rf_bandwidth_mbps = -3.0;
    assert!(matches!(SystemModel::new(&settings), Err(LabError::Config(_))));
}

#[test]
fn test_sweep_finds_both_bottlenecks() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let outcomes = run_scenarios(&["configs/default.toml"], "configs/scenarios/*.toml", |_| {})?;
    let labels: Vec<_> = outcomes.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["communication_heavy", "compute_heavy"]);

    assert_eq!(outcomes[0].result.bottleneck.stage, "rf");
    assert_eq!(outcomes[1].result.bottleneck.stage, "matrix");
    for outcome in &outcomes {
        assert_eq!(outcome.settings.system.matrix_size, 32);
        assert!(outcome.result.shared_secret_match);
    }

    let text = render_comparison(&outcomes);
    assert!(text.contains("=== compute_heavy ==="));
    assert!(text.contains("bottleneck: rf"));
    Ok(())
}

#[test]
fn test_result_json() -> Result<(), Box<dyn std::error::Error>> {
    let system = SystemModel::new(&Settings::default())?;
    let (matrix, vector) = system.make_input();
    let result = system.run_pipeline(&matrix, &vector)?;

    let json: serde_json::Value = serde_json::to_value(&result)?;
    for key in [
        "matrix_output",
        "dsp_output",
        "plaintext_bytes_recovered",
        "shared_secret_match",
        "latencies",
        "bottleneck",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["latencies"].as_object().map(|m| m.len()), Some(7));
    assert_eq!(json["bottleneck"]["stage"], result.bottleneck.stage.as_str());
    assert_eq!(json["shared_secret_match"], true);
    Ok(())
}

#[test]
fn test_huge_window_runs() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::default();
    settings.system.dsp_window = usize::MAX;
    let system = SystemModel::new(&settings)?;
    let (matrix, vector) = system.make_input();
    let result = system.run_pipeline(&matrix, &vector)?;
    assert!(result.latencies.dsp.is_finite());
    assert_eq!(result.bottleneck.stage, "dsp");
    Ok(())
}
