use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::string::String;

use crate::error::{LabError, LabResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub system: SystemSettings,
    pub matrix: MatrixSettings,
    pub dsp: DspSettings,
    pub rf: RfSettings,
    pub pqc: PqcSettings,
}

/// Workload shape and the link bandwidth. The bandwidth lives here only, so the
/// rf module is built once with its final value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub matrix_size: usize,
    pub dsp_window: usize,
    pub seed: u64,
    pub rf_bandwidth_mbps: f64,
}

impl Default for SystemSettings {
    fn default() -> Self {
        SystemSettings {
            matrix_size: 3,
            dsp_window: 3,
            seed: 0,
            rf_bandwidth_mbps: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixSettings {
    pub name: String,
    pub base_latency: f64,
    pub cost_per_op: f64,
}

impl Default for MatrixSettings {
    fn default() -> Self {
        MatrixSettings {
            name: "matrix_accel".into(),
            base_latency: 1.0,
            cost_per_op: 0.001,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DspSettings {
    pub name: String,
    pub base_latency: f64,
    pub cost_per_op: f64,
}

impl Default for DspSettings {
    fn default() -> Self {
        DspSettings {
            name: "dsp_accel".into(),
            base_latency: 0.5,
            cost_per_op: 0.0005,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RfSettings {
    pub name: String,
    pub propagation_latency: f64,
}

impl Default for RfSettings {
    fn default() -> Self {
        RfSettings {
            name: "rf_module".into(),
            propagation_latency: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PqcSettings {
    pub name: String,
    pub keygen_latency: f64,
    pub encap_latency: f64,
    pub decap_latency: f64,
}

impl Default for PqcSettings {
    fn default() -> Self {
        PqcSettings {
            name: "pqc_accel".into(),
            keygen_latency: 0.2,
            encap_latency: 0.1,
            decap_latency: 0.1,
        }
    }
}

impl Settings {
    /// # Description
    /// - load the settings from a list of toml files
    /// - later files override earlier ones, missing keys keep their defaults
    pub fn new<S: AsRef<str>>(config_path: &[S]) -> LabResult<Self> {
        let mut builder = Config::builder();
        for path in config_path {
            builder = builder.add_source(File::with_name(path.as_ref()));
        }
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// reject values the latency models cannot work with
    pub fn validate(&self) -> LabResult<()> {
        let system = &self.system;
        if system.matrix_size == 0 {
            return Err(LabError::Config("matrix_size must be positive".into()));
        }
        if system.dsp_window == 0 {
            return Err(LabError::Config("dsp_window must be at least 1".into()));
        }
        check_bandwidth(system.rf_bandwidth_mbps)?;

        let coefficients = [
            ("matrix.base_latency", self.matrix.base_latency),
            ("matrix.cost_per_op", self.matrix.cost_per_op),
            ("dsp.base_latency", self.dsp.base_latency),
            ("dsp.cost_per_op", self.dsp.cost_per_op),
            ("rf.propagation_latency", self.rf.propagation_latency),
            ("pqc.keygen_latency", self.pqc.keygen_latency),
            ("pqc.encap_latency", self.pqc.encap_latency),
            ("pqc.decap_latency", self.pqc.decap_latency),
        ];
        for (key, value) in coefficients {
            check_latency(key, value)?;
        }
        Ok(())
    }
}

pub(crate) fn check_bandwidth(bandwidth_mbps: f64) -> LabResult<()> {
    if !(bandwidth_mbps.is_finite() && bandwidth_mbps > 0.0) {
        return Err(LabError::Config(format!(
            "rf bandwidth must be positive, got {} Mb/s",
            bandwidth_mbps
        )));
    }
    Ok(())
}

pub(crate) fn check_latency(key: &str, value: f64) -> LabResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(LabError::Config(format!(
            "{} must be a non-negative number, got {}",
            key, value
        )));
    }
    Ok(())
}
