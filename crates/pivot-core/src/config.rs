//! Enhancer configuration

use serde::{Deserialize, Serialize};

/// Tunables for one enhancer instance. The three constructors reproduce
/// the shipped variants of the navigation scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selector of the region partial responses replace
    pub target_region: String,
    /// Swap behavior directive written onto wired anchors
    pub swap_style: String,
    /// Event that triggers a partial navigation
    pub trigger: String,
    /// Response header carrying the updated document title
    pub title_header: String,
    /// Response header carrying the updated quote, when quote sync is on
    pub quote_header: Option<String>,
    /// Selector of the quote display element
    pub quote_selector: Option<String>,
    /// Leave cross-origin anchors with raw scheme-prefixed hrefs alone;
    /// the server already rendered those for a new browsing context
    pub exempt_external: bool,
    /// Swap in a server-supplied not-found page instead of discarding it
    pub render_not_found: bool,
    /// Whether the patching library refetches on a history miss
    pub refresh_on_history_miss: bool,
    /// Wire same-origin anchors for partial navigation at all
    pub intercept: bool,
}

impl Config {
    /// The base variant: interception, title sync, history push.
    pub fn standard() -> Self {
        Self {
            target_region: "#content".to_string(),
            swap_style: "outerHTML show:top".to_string(),
            trigger: "click".to_string(),
            title_header: "Updated-Title".to_string(),
            quote_header: None,
            quote_selector: None,
            exempt_external: false,
            render_not_found: false,
            refresh_on_history_miss: true,
            intercept: true,
        }
    }

    /// The relaxed variant: adds quote sync, the external-link exemption,
    /// not-found rendering, and keeps history traversal off the network.
    pub fn extended() -> Self {
        Self {
            quote_header: Some("Updated-Quote".to_string()),
            quote_selector: Some("#quote".to_string()),
            exempt_external: true,
            render_not_found: true,
            refresh_on_history_miss: false,
            ..Self::standard()
        }
    }

    /// The minimal variant: cross-origin retargeting only, no interception.
    pub fn retarget_only() -> Self {
        Self {
            intercept: false,
            ..Self::standard()
        }
    }

    /// Whether quote synchronization is configured.
    pub fn syncs_quote(&self) -> bool {
        self.quote_header.is_some() && self.quote_selector.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}
