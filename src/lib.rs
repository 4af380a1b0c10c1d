//! the crate accel_lab is a latency simulator for a heterogeneous accelerator pipeline.
//! there are 5 parts in the crate:
//!
//! - accelerator: the stage models (matrix, dsp, rf, pqc), the scheduler and the system model.
//! - settings: the configuration tree, loaded from toml files.
//! - lab_result: the latency report and the result of a pipeline run.
//! - sweep: run several scenario configs and compare their bottlenecks.
//! - report: text rendering of results.
//!
//! the pqc stage is a placeholder and provides no security.

pub mod accelerator;
pub mod cmd_args;
pub mod error;
pub mod lab_result;
pub mod report;
pub mod settings;
pub mod sweep;

pub use accelerator::SystemModel;
pub use error::{LabError, LabResult};
pub use lab_result::{LabReport, LatencyReport, PipelineResult};
pub use settings::Settings;
