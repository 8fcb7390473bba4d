//! Shared application state.
//!
//! Holds the single most-recent interaction and the provider handle. The
//! record is replaced wholesale under a write lock so readers never observe
//! a new input paired with a stale response. The lock is never held across
//! the provider call or any await point.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::provider::TextGenerator;

/// The most recent input/output pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// The trimmed intent text the client sent.
    pub text: String,
    /// The trimmed text the provider generated for it.
    pub response: String,
}

/// Shared state for all request handlers.
pub struct AppState {
    latest: RwLock<Option<InteractionRecord>>,
    provider: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Create state with no interaction recorded yet.
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self {
            latest: RwLock::new(None),
            provider,
        }
    }

    /// The text-generation provider.
    pub fn provider(&self) -> &dyn TextGenerator {
        self.provider.as_ref()
    }

    /// Snapshot of the most recent interaction, if any.
    pub fn latest(&self) -> Option<InteractionRecord> {
        self.latest.read().clone()
    }

    /// Overwrite the stored interaction with a new pair.
    ///
    /// Concurrent generations are not serialized against each other;
    /// whichever completes last wins.
    pub fn record(&self, text: String, response: String) {
        *self.latest.write() = Some(InteractionRecord { text, response });
    }
}
