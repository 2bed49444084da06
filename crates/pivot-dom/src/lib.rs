//! Pivot Document Model
//!
//! Headless stand-in for the live DOM: real HTML is parsed into an
//! anchor-centric document the enhancer can classify and rewrite without a
//! browser context. The document and the page origin are always passed in
//! explicitly, so everything here is testable in isolation.

mod anchor;
mod document;
mod error;

pub use anchor::{
    Anchor, ATTR_FETCH, ATTR_REGION, ATTR_SWAP, ATTR_TARGET, ATTR_TRIGGER, TARGET_NEW_CONTEXT,
};
pub use document::Document;
pub use error::DomError;

pub type Result<T> = std::result::Result<T, DomError>;
