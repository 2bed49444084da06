//! Pivot History
//!
//! The browser-owned navigation stack, modeled in memory. Partial
//! navigations push entries with the push-state triple of an opaque state
//! object, an unused title slot, and the final request URL; back and
//! forward walk a cursor over the stack without touching the network.

mod entry;
mod stack;

pub use entry::HistoryEntry;
pub use stack::HistoryStack;
