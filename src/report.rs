use crate::lab_result::PipelineResult;
use crate::settings::Settings;
use crate::sweep::ScenarioOutcome;

fn write_latencies(out: &mut String, result: &PipelineResult) {
    for (stage, latency) in result.latencies.entries() {
        out.push_str(&format!("  {:>16}: {:.4}\n", stage, latency));
    }
}

/// human readable summary of a single run
pub fn render_text(settings: &Settings, result: &PipelineResult) -> String {
    let system = &settings.system;
    let mut out = String::new();
    out.push_str("=== accel_lab: matrix + DSP + RF + PQC pipeline ===\n");
    out.push_str(&format!("Matrix size: {}x{}\n", system.matrix_size, system.matrix_size));
    out.push_str(&format!("DSP window: {}\n", system.dsp_window));
    out.push_str(&format!("RF bandwidth: {} Mb/s\n", system.rf_bandwidth_mbps));
    out.push_str(&format!("Matrix output: {:?}\n", result.matrix_output));
    out.push_str(&format!("DSP output: {:?}\n", result.dsp_output));
    out.push_str(&format!("Shared secret match: {}\n", result.shared_secret_match));
    out.push_str("Latency breakdown (time units):\n");
    write_latencies(&mut out, result);
    out.push_str(&format!("Bottleneck stage: {}\n", result.bottleneck.stage));
    out.push_str(&format!("Bottleneck latency: {:.4}\n", result.bottleneck.latency));
    out
}

/// one block per scenario
pub fn render_comparison(outcomes: &[ScenarioOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let system = &outcome.settings.system;
        out.push_str(&format!("\n=== {} ===\n", outcome.label));
        out.push_str(&format!(
            "matrix_size={}, dsp_window={}, rf_bandwidth={} Mb/s\n",
            system.matrix_size, system.dsp_window, system.rf_bandwidth_mbps
        ));
        write_latencies(&mut out, &outcome.result);
        out.push_str(&format!("  bottleneck: {}\n", outcome.result.bottleneck.stage));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::SystemModel;

    #[test]
    fn test_render_text() {
        let settings = Settings::default();
        let system = SystemModel::new(&settings).unwrap();
        let matrix = vec![vec![1.0, 0.5], vec![0.0, 1.0]];
        let result = system.run_pipeline(&matrix, &[1.0, 2.0]).unwrap();

        let text = render_text(&settings, &result);
        assert!(text.contains("Matrix output: [2.0, 2.0]"));
        assert!(text.contains("Shared secret match: true"));
        assert!(text.contains(&format!("{:>16}: ", "pqc_encapsulate")));
        assert!(text.contains("Bottleneck stage: rf"));
        assert!(text.starts_with("=== accel_lab"));
        // header, 3 config lines, 2 outputs, match, table title, 7 stages, 2 bottleneck lines
        assert_eq!(text.lines().count(), 17);
        assert!(text.ends_with('\n'));
    }
}
