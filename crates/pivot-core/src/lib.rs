//! Pivot Core
//!
//! The navigation enhancer engine. It classifies every anchor of a page
//! against the page's true origin, wires same-origin anchors with partial
//! navigation directives, points cross-origin anchors at a new browsing
//! context, and keeps document title, quote display, and history in step
//! with each settled navigation.
//!
//! A host drives the engine: parse the page into a [`Document`], build an
//! [`Enhancer`], call [`Enhancer::initialize`], subscribe it on an
//! [`EventBus`] with [`Enhancer::install`], then emit `before-swap` and
//! `after-settle` around every fetch the patching library performs.

mod config;
mod enhancer;
mod error;
mod wire;

pub use config::Config;
pub use enhancer::Enhancer;
pub use error::CoreError;
pub use wire::{classify, wire_document, LinkClass, WireSummary};

// Building blocks hosts interact with directly
pub use pivot_dom::{
    Anchor, Document, DomError, ATTR_FETCH, ATTR_REGION, ATTR_SWAP, ATTR_TARGET, ATTR_TRIGGER,
    TARGET_NEW_CONTEXT,
};
pub use pivot_events::{
    EventBus, HeaderMap, Lifecycle, Patcher, RecordingPatcher, Response, SettleEvent, StatusCode,
    SwapReview,
};
pub use pivot_history::{HistoryEntry, HistoryStack};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
