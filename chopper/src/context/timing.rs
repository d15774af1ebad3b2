// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC

use std::time::Duration;

use tracing::{info, warn};

pub(crate) const DEFAULT_DELAY_MS: i64 = 200;
const SMALL_DELAY_MS: i64 = 10;

/// Delay between hops and optional run time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopTiming {
    pub delay: Duration,
    pub timeout: Option<Duration>,
}

impl HopTiming {
    /// Build from the raw flag values. `None` means the flag was not passed.
    pub fn new(delay_ms: Option<i64>, timeout_secs: Option<i64>) -> Self {
        let timing = Self {
            delay: delay_from(delay_ms),
            timeout: timeout_from(timeout_secs),
        };

        info!("Hop delay: {}ms", timing.delay.as_millis());
        match timing.timeout {
            Some(timeout) => info!("Timeout: {}s", timeout.as_secs()),
            None => info!("Timeout: none, running until SIGINT"),
        }

        timing
    }
}

fn delay_from(delay_ms: Option<i64>) -> Duration {
    let ms = match delay_ms {
        None => DEFAULT_DELAY_MS,
        Some(ms) => {
            if ms < SMALL_DELAY_MS {
                warn!("the delay is very small ({}ms), why are you doing this?", ms);
            }
            ms
        }
    };
    Duration::from_millis(ms.max(0) as u64)
}

fn timeout_from(timeout_secs: Option<i64>) -> Option<Duration> {
    match timeout_secs {
        None => None,
        Some(secs) if secs <= 0 => {
            warn!("timeout cannot be {}, running until SIGINT", secs);
            None
        }
        Some(secs) => Some(Duration::from_secs(secs as u64)),
    }
}
