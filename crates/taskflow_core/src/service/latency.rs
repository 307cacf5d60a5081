//! Simulated network latency policy.
//!
//! # Responsibility
//! - Model the artificial delay a real backend call would introduce.
//!
//! # Invariants
//! - The default profile pauses uniformly within `[200ms, 500ms)`.
//! - A disabled policy never sleeps and never touches the RNG.

use rand::Rng;
use std::ops::Range;
use std::thread;
use std::time::Duration;

const NETWORK_DELAY_MS: Range<u64> = 200..500;

/// Pre-operation pause applied by the mock services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedLatency {
    range_ms: Option<Range<u64>>,
}

impl SimulatedLatency {
    /// Latency profile resembling a typical network round trip.
    pub fn network_default() -> Self {
        Self {
            range_ms: Some(NETWORK_DELAY_MS),
        }
    }

    /// No pause at all, for in-process callers and tests.
    pub fn disabled() -> Self {
        Self { range_ms: None }
    }

    /// Draws the next pause duration in milliseconds.
    pub fn sample_ms(&self) -> Option<u64> {
        let range = self.range_ms.clone()?;
        Some(rand::rng().random_range(range))
    }

    /// Blocks the calling thread for one sampled pause.
    pub(crate) fn pause(&self) {
        if let Some(ms) = self.sample_ms() {
            thread::sleep(Duration::from_millis(ms));
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::network_default()
    }
}
