//! Lifecycle event payloads

use http::StatusCode;

use crate::response::Response;

/// The two lifecycle signals the enhancer subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Raised before a response body replaces the target region
    BeforeSwap,
    /// Raised after swapped content has settled into the document
    AfterSettle,
}

impl Lifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::BeforeSwap => "before-swap",
            Lifecycle::AfterSettle => "after-settle",
        }
    }
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable review of a response before its body is swapped in. Subscribers
/// may override the library's verdict on whether the swap happens.
#[derive(Debug, Clone)]
pub struct SwapReview {
    pub status: StatusCode,
    /// Whether the body will replace the target region
    pub should_swap: bool,
    /// Whether the response counts as an error
    pub is_error: bool,
}

impl SwapReview {
    /// The library's default verdict for a status: successful responses
    /// swap, client and server errors are flagged and discarded.
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            status,
            should_swap: status.is_success(),
            is_error: status.is_client_error() || status.is_server_error(),
        }
    }
}

/// Payload of the after-settle signal.
#[derive(Debug, Clone)]
pub struct SettleEvent {
    /// The triggering response. History traversals settle without one.
    pub response: Option<Response>,
    /// Final request path after redirects
    pub final_path: String,
}

impl SettleEvent {
    /// Settle carrying a network response.
    pub fn network(response: Response, final_path: impl Into<String>) -> Self {
        Self {
            response: Some(response),
            final_path: final_path.into(),
        }
    }

    /// Settle from a history traversal, with no response attached.
    pub fn history(final_path: impl Into<String>) -> Self {
        Self {
            response: None,
            final_path: final_path.into(),
        }
    }
}
