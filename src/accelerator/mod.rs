//! # Description
//! - this module holds the stage models and the pipeline that chains them
//! - the main sub module is system, read system.rs for the stage order
//!
//! # Components
//! - matrix: dense matrix-vector multiply
//! - dsp: causal moving-average filter
//! - rf: lossless link with propagation and serialization delay
//! - pqc: placeholder key encapsulation, not real cryptography
//! - scheduler: labels the bottleneck stage after a run
//!

pub(self) mod component;
pub mod dsp;
pub mod matrix;
pub mod pqc;
pub mod rf;
pub mod scheduler;
pub(self) mod system;

pub use component::Component;
pub use dsp::DspAccelerator;
pub use matrix::{Matrix, MatrixAccelerator};
pub use pqc::{Decapsulation, Encapsulation, KeyPair, PqcSecurityAccelerator};
pub use rf::RfModule;
pub use scheduler::{Bottleneck, SimpleScheduler};
pub use system::{serialize_signal, SystemModel};
