//! History entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry on the navigation stack, carrying the push-state triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    /// Opaque state object; partial navigations push an empty one
    pub state: Value,
    /// Title slot of the push call; kept for fidelity, never displayed
    pub title: String,
    pub pushed_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: Value::Object(serde_json::Map::new()),
            title: String::new(),
            pushed_at: Utc::now(),
        }
    }

    pub fn with_state(url: impl Into<String>, state: Value) -> Self {
        Self {
            state,
            ..Self::new(url)
        }
    }
}
