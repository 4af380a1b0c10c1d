use chrono::Local;
use serde::Serialize;

use crate::accelerator::Bottleneck;
use crate::settings::Settings;

/// per-stage latency in pipeline order; `total` is the sum of the other six
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencyReport {
    pub matrix: f64,
    pub dsp: f64,
    pub rf: f64,
    pub pqc_keygen: f64,
    pub pqc_encapsulate: f64,
    pub pqc_decapsulate: f64,
    pub total: f64,
}

impl LatencyReport {
    pub fn new(
        matrix: f64,
        dsp: f64,
        rf: f64,
        pqc_keygen: f64,
        pqc_encapsulate: f64,
        pqc_decapsulate: f64,
    ) -> Self {
        LatencyReport {
            matrix,
            dsp,
            rf,
            pqc_keygen,
            pqc_encapsulate,
            pqc_decapsulate,
            total: matrix + dsp + rf + pqc_keygen + pqc_encapsulate + pqc_decapsulate,
        }
    }

    /// named stages followed by `total`
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("matrix", self.matrix),
            ("dsp", self.dsp),
            ("rf", self.rf),
            ("pqc_keygen", self.pqc_keygen),
            ("pqc_encapsulate", self.pqc_encapsulate),
            ("pqc_decapsulate", self.pqc_decapsulate),
            ("total", self.total),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub matrix_output: Vec<f64>,
    pub dsp_output: Vec<f64>,
    pub plaintext_bytes_recovered: Vec<u8>,
    pub shared_secret_match: bool,
    pub latencies: LatencyReport,
    pub bottleneck: Bottleneck,
}

/// one run as written out by the binary
#[derive(Debug, Serialize)]
pub struct LabReport {
    pub settings: Settings,
    pub result: PipelineResult,
    pub simulation_time: String,
    pub generated_at: String,
}

impl LabReport {
    pub fn new(settings: Settings, result: PipelineResult) -> Self {
        LabReport {
            settings,
            result,
            simulation_time: String::new(),
            generated_at: Local::now().format("%Y-%m-%d-%H-%M-%S%.6f").to_string(),
        }
    }
}
