use itertools::Itertools;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::{
    component::Component,
    dsp::DspAccelerator,
    matrix::{Matrix, MatrixAccelerator},
    pqc::PqcSecurityAccelerator,
    rf::RfModule,
    scheduler::SimpleScheduler,
};
use crate::error::LabResult;
use crate::lab_result::{LatencyReport, PipelineResult};
use crate::settings::Settings;

/// # Description
/// the whole stack, run once per call:
///
/// input -> matrix -> dsp -> serialize -> rf -> pqc keygen -> encapsulate -> decapsulate
///
/// every stage model is owned by this instance, nothing is carried between calls
#[derive(Debug, Clone)]
pub struct SystemModel {
    matrix_accel: MatrixAccelerator,
    dsp_accel: DspAccelerator,
    rf_module: RfModule,
    pqc_accel: PqcSecurityAccelerator,
    scheduler: SimpleScheduler,

    matrix_size: usize,
    dsp_window: usize,
    seed: u64,
}

/// fixed four-decimal text, comma separated
pub fn serialize_signal(signal: &[f64]) -> Vec<u8> {
    signal
        .iter()
        .map(|v| format!("{:.4}", v))
        .join(",")
        .into_bytes()
}

impl SystemModel {
    pub fn new(settings: &Settings) -> LabResult<SystemModel> {
        settings.validate()?;
        let system = &settings.system;
        Ok(SystemModel {
            matrix_accel: MatrixAccelerator::new(&settings.matrix),
            dsp_accel: DspAccelerator::new(&settings.dsp),
            rf_module: RfModule::new(&settings.rf, system.rf_bandwidth_mbps)?,
            pqc_accel: PqcSecurityAccelerator::new(&settings.pqc),
            scheduler: SimpleScheduler::new(),
            matrix_size: system.matrix_size,
            dsp_window: system.dsp_window,
            seed: system.seed,
        })
    }

    /// # Description
    /// - reseed from the configured seed and draw an `n x n` matrix then a
    ///   length-`n` vector, uniform in `[-1, 1]`
    /// - the matrix is drawn first, row by row, so the same seed and size always
    ///   give the same values
    pub fn make_input(&self) -> (Matrix, Vec<f64>) {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);
        let n = self.matrix_size;
        let matrix: Matrix = (0..n)
            .map(|_| (0..n).map(|_| rng.gen_range(-1.0..=1.0)).collect::<Vec<f64>>())
            .collect();
        let vector: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        (matrix, vector)
    }

    /// # Description
    /// run every stage once and collect the latency breakdown
    /// # Return
    /// the complete result, or the first stage error untouched
    pub fn run_pipeline(&self, matrix: &Matrix, vector: &[f64]) -> LabResult<PipelineResult> {
        debug!("start pipeline {:?}, n = {}", self.stage_names(), vector.len());
        let (matrix_output, matrix_latency) = self.matrix_accel.run(matrix, vector)?;

        let (dsp_output, dsp_latency) = self.dsp_accel.run(&matrix_output, self.dsp_window);

        let payload = serialize_signal(&dsp_output);
        let (rf_payload, rf_latency) = self.rf_module.transmit(payload);

        let (keys, keygen_latency) = self.pqc_accel.keypair();
        let (encapsulation, encap_latency) =
            self.pqc_accel.encapsulate(&keys.public_key, &rf_payload);
        let (decapsulation, decap_latency) = self.pqc_accel.decapsulate(
            &keys.public_key,
            &keys.secret_key,
            &encapsulation.ciphertext,
        );

        let latencies = LatencyReport::new(
            matrix_latency,
            dsp_latency,
            rf_latency,
            keygen_latency,
            encap_latency,
            decap_latency,
        );
        let bottleneck = self.scheduler.find_bottleneck(latencies.entries());
        info!(
            "pipeline done: total {:.4}, bottleneck {} ({:.4})",
            latencies.total, bottleneck.stage, bottleneck.latency
        );

        Ok(PipelineResult {
            matrix_output,
            dsp_output,
            plaintext_bytes_recovered: decapsulation.plaintext,
            shared_secret_match: encapsulation.shared_secret == decapsulation.shared_secret,
            latencies,
            bottleneck,
        })
    }

    /// names of the stage models, in pipeline order
    pub fn stage_names(&self) -> [&str; 4] {
        [
            self.matrix_accel.name(),
            self.dsp_accel.name(),
            self.rf_module.name(),
            self.pqc_accel.name(),
        ]
    }
}
