use log::debug;
use serde::Serialize;

/// the aggregate key, never a bottleneck candidate
pub const TOTAL_KEY: &str = "total";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bottleneck {
    pub stage: String,
    pub latency: f64,
}

impl Bottleneck {
    pub fn none() -> Self {
        Bottleneck {
            stage: "none".into(),
            latency: 0.0,
        }
    }
}

/// # Description
/// - inspects a latency breakdown and labels the slowest stage
/// - it does not reorder or run anything
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleScheduler;

impl SimpleScheduler {
    pub fn new() -> Self {
        SimpleScheduler
    }

    /// # Description
    /// - pick the stage with the largest latency, skipping `total`
    /// - equal maxima resolve to the lexicographically smallest name, so the
    ///   answer does not depend on iteration order
    /// - NaN never wins
    /// - nothing left after filtering gives `("none", 0.0)`
    pub fn find_bottleneck<'a, I>(&self, latencies: I) -> Bottleneck
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut best: Option<(&str, f64)> = None;
        for (stage, latency) in latencies {
            if stage == TOTAL_KEY || latency.is_nan() {
                continue;
            }
            best = match best {
                Some((best_stage, best_latency))
                    if best_latency > latency
                        || (best_latency == latency && best_stage <= stage) =>
                {
                    Some((best_stage, best_latency))
                }
                _ => Some((stage, latency)),
            };
        }

        let bottleneck = match best {
            Some((stage, latency)) => Bottleneck {
                stage: stage.to_string(),
                latency,
            },
            None => Bottleneck::none(),
        };
        debug!("bottleneck: {:?}", bottleneck);
        bottleneck
    }
}
