use log::debug;

use super::component::Component;
use crate::settings::DspSettings;

/// moving-average filter stage
#[derive(Debug, Clone, PartialEq)]
pub struct DspAccelerator {
    name: String,
    base_latency: f64,
    cost_per_op: f64,
}

impl Component for DspAccelerator {
    fn name(&self) -> &str {
        &self.name
    }
}

impl DspAccelerator {
    pub fn new(settings: &DspSettings) -> DspAccelerator {
        DspAccelerator {
            name: settings.name.clone(),
            base_latency: settings.base_latency,
            cost_per_op: settings.cost_per_op,
        }
    }

    /// # Description
    /// - causal moving average: sample `i` is the mean of `signal[i-window+1..=i]`,
    ///   the window shrinks at the start instead of padding
    /// - an empty signal or `window <= 1` passes through at base latency
    /// - the cost is charged on the configured window, even where the effective
    ///   window is shorter
    pub fn run(&self, signal: &[f64], window: usize) -> (Vec<f64>, f64) {
        if signal.is_empty() || window <= 1 {
            return (signal.to_vec(), self.base_latency);
        }

        let n = signal.len();
        let output = (0..n)
            .map(|i| {
                let start = (i + 1).saturating_sub(window);
                let values = &signal[start..=i];
                values.iter().sum::<f64>() / values.len() as f64
            })
            .collect();

        // in f64, a huge window must not overflow the op count
        let ops = n as f64 * window as f64;
        let latency = self.base_latency + self.cost_per_op * ops;
        debug!("{}: {} samples, window {}, latency {}", self.name, n, window, latency);
        (output, latency)
    }
}
