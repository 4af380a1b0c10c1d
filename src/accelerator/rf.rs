use log::debug;

use super::component::Component;
use crate::error::LabResult;
use crate::settings::{check_bandwidth, RfSettings};

/// # Description
/// lossless point-to-point link: fixed propagation delay plus the time to
/// serialize the payload at the configured bandwidth
#[derive(Debug, Clone, PartialEq)]
pub struct RfModule {
    name: String,
    propagation_latency: f64,
    bandwidth_mbps: f64,
}

impl Component for RfModule {
    fn name(&self) -> &str {
        &self.name
    }
}

impl RfModule {
    /// fails when the bandwidth is zero, negative or not finite
    pub fn new(settings: &RfSettings, bandwidth_mbps: f64) -> LabResult<RfModule> {
        check_bandwidth(bandwidth_mbps)?;
        Ok(RfModule {
            name: settings.name.clone(),
            propagation_latency: settings.propagation_latency,
            bandwidth_mbps,
        })
    }

    /// the payload is returned untouched
    pub fn transmit(&self, payload: Vec<u8>) -> (Vec<u8>, f64) {
        let bits = (payload.len() * 8) as f64;
        let serialization_time = bits / (self.bandwidth_mbps * 1e6);
        let latency = self.propagation_latency + serialization_time;
        debug!("{}: {} bytes, latency {}", self.name, payload.len(), latency);
        (payload, latency)
    }
}
