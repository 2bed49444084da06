//! Patching library seam
//!
//! The library that applies content swaps is an opaque collaborator: the
//! enhancer writes navigation directives onto anchors and hands them over
//! for activation. Hosts embedding a real library implement [`Patcher`];
//! [`RecordingPatcher`] is the in-memory stand-in used by default.

use parking_lot::RwLock;
use std::sync::Arc;

pub trait Patcher: Send + Sync {
    /// Activate the directives freshly written onto an anchor.
    fn process(&self, anchor_id: &str);

    /// Toggle whether a history miss goes back to the network.
    fn set_refresh_on_history_miss(&self, enabled: bool);
}

/// In-memory patcher recording every request made of it.
pub struct RecordingPatcher {
    processed: Arc<RwLock<Vec<String>>>,
    refresh_on_history_miss: Arc<RwLock<bool>>,
}

impl RecordingPatcher {
    pub fn new() -> Self {
        Self {
            processed: Arc::new(RwLock::new(Vec::new())),
            // The library refetches on a history miss unless told otherwise
            refresh_on_history_miss: Arc::new(RwLock::new(true)),
        }
    }

    /// Ids handed over for processing, in order.
    pub fn processed(&self) -> Vec<String> {
        self.processed.read().clone()
    }

    /// How many times one anchor was processed.
    pub fn process_count(&self, anchor_id: &str) -> usize {
        self.processed.read().iter().filter(|id| *id == anchor_id).count()
    }

    pub fn refresh_on_history_miss(&self) -> bool {
        *self.refresh_on_history_miss.read()
    }
}

impl Default for RecordingPatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingPatcher {
    fn clone(&self) -> Self {
        Self {
            processed: Arc::clone(&self.processed),
            refresh_on_history_miss: Arc::clone(&self.refresh_on_history_miss),
        }
    }
}

impl Patcher for RecordingPatcher {
    fn process(&self, anchor_id: &str) {
        tracing::debug!(anchor_id = %anchor_id, "Processing anchor");
        self.processed.write().push(anchor_id.to_string());
    }

    fn set_refresh_on_history_miss(&self, enabled: bool) {
        tracing::debug!(enabled = enabled, "Setting history miss refresh");
        *self.refresh_on_history_miss.write() = enabled;
    }
}
