//! Pivot Lifecycle Events
//!
//! Payloads and the subscription bus for the two lifecycle signals a
//! partial navigation raises, plus the seam to the opaque patching
//! library that applies content swaps.

mod bus;
mod event;
mod patcher;
mod response;

pub use bus::EventBus;
pub use event::{Lifecycle, SettleEvent, SwapReview};
pub use patcher::{Patcher, RecordingPatcher};
pub use response::Response;

// HTTP vocabulary shared with downstream crates
pub use http::{HeaderMap, StatusCode};
