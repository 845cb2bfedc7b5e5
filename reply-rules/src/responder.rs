//! # Responder
//!
//! Façade over the default rule chain that models responder latency: every call
//! suspends for a uniformly random delay before the chain runs. Callers must
//! await it like a network round-trip; there is no cancellation and no timeout;
//! a call always eventually resolves, and a dropped future simply discards the
//! late reply.

use std::sync::Arc;
use std::time::Duration;

use nova_core::RuleError;
use rand::Rng;
use tracing::{debug, instrument};

use crate::chain::RuleChain;
use crate::picker::{Picker, RandomPicker};
use crate::rules::default_chain;

/// Simulated-latency bounds, in milliseconds.
const DEFAULT_DELAY_MS: (u64, u64) = (1000, 3000);

/// The synthetic responder. Cheap to share behind an `Arc`.
pub struct Responder {
    chain: RuleChain,
    delay_ms: (u64, u64),
}

impl Responder {
    /// Default cascade, random fallback picks, 1–3 s simulated latency.
    pub fn new() -> Self {
        Self::with_picker(Arc::new(RandomPicker))
    }

    /// Default cascade with a caller-supplied fallback picker.
    pub fn with_picker(picker: Arc<dyn Picker>) -> Self {
        Self {
            chain: default_chain(picker),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    /// Overrides the simulated-latency bounds; `(0, 0)` disables the delay for
    /// tests.
    pub fn with_delay_ms(mut self, min: u64, max: u64) -> Self {
        self.delay_ms = (min, max.max(min));
        self
    }

    /// Classifies one user message and returns the canned reply after the
    /// simulated delay.
    #[instrument(skip(self, message))]
    pub async fn respond(&self, message: &str) -> Result<String, RuleError> {
        let (min, max) = self.delay_ms;
        let delay = if max > min {
            rand::rng().random_range(min..=max)
        } else {
            min
        };
        if delay > 0 {
            debug!(delay_ms = delay, "Simulating responder latency");
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        self.chain.run(message).await
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}
