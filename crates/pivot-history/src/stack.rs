//! Navigation stack
//!
//! Push-state semantics: pushing while the cursor sits behind the top
//! discards the forward branch, traversal only moves the cursor.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::entry::HistoryEntry;

struct StackInner {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

pub struct HistoryStack {
    inner: Arc<RwLock<StackInner>>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StackInner {
                entries: Vec::new(),
                cursor: None,
            })),
        }
    }

    /// Push a URL with an empty state object, discarding any forward branch.
    pub fn push(&self, url: impl Into<String>) -> HistoryEntry {
        self.push_entry(HistoryEntry::new(url))
    }

    /// Push a prepared entry, discarding any forward branch.
    pub fn push_entry(&self, entry: HistoryEntry) -> HistoryEntry {
        let mut inner = self.inner.write();
        if let Some(cursor) = inner.cursor {
            inner.entries.truncate(cursor + 1);
        }
        inner.entries.push(entry.clone());
        inner.cursor = Some(inner.entries.len() - 1);
        tracing::debug!(url = %entry.url, depth = inner.entries.len(), "Pushed history entry");
        entry
    }

    /// Entry under the cursor
    pub fn current(&self) -> Option<HistoryEntry> {
        let inner = self.inner.read();
        inner.cursor.map(|cursor| inner.entries[cursor].clone())
    }

    /// Move the cursor one entry back. No network involved.
    pub fn back(&self) -> Option<HistoryEntry> {
        let mut inner = self.inner.write();
        match inner.cursor {
            Some(cursor) if cursor > 0 => {
                inner.cursor = Some(cursor - 1);
                Some(inner.entries[cursor - 1].clone())
            }
            _ => None,
        }
    }

    /// Move the cursor one entry forward. No network involved.
    pub fn forward(&self) -> Option<HistoryEntry> {
        let mut inner = self.inner.write();
        match inner.cursor {
            Some(cursor) if cursor + 1 < inner.entries.len() => {
                inner.cursor = Some(cursor + 1);
                Some(inner.entries[cursor + 1].clone())
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Snapshot of the whole stack, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.inner.read().entries.clone()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HistoryStack {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_moves_cursor_to_top() {
        let stack = HistoryStack::new();
        assert!(stack.is_empty());
        assert!(stack.current().is_none());

        stack.push("https://site.example/");
        stack.push("https://site.example/logs/first");

        assert_eq!(stack.len(), 2);
        assert_eq!(
            stack.current().unwrap().url,
            "https://site.example/logs/first"
        );
    }

    #[test]
    fn test_back_and_forward_walk_the_stack() {
        let stack = HistoryStack::new();
        stack.push("/");
        stack.push("/a");
        stack.push("/b");

        assert_eq!(stack.back().unwrap().url, "/a");
        assert_eq!(stack.back().unwrap().url, "/");
        assert!(stack.back().is_none());

        assert_eq!(stack.forward().unwrap().url, "/a");
        assert_eq!(stack.forward().unwrap().url, "/b");
        assert!(stack.forward().is_none());
    }

    #[test]
    fn test_push_after_back_discards_forward_branch() {
        let stack = HistoryStack::new();
        stack.push("/");
        stack.push("/a");
        stack.push("/b");
        stack.back();
        stack.back();

        stack.push("/c");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.current().unwrap().url, "/c");
        assert!(stack.forward().is_none());
        let urls: Vec<String> = stack.entries().into_iter().map(|e| e.url).collect();
        assert_eq!(urls, vec!["/", "/c"]);
    }

    #[test]
    fn test_clones_share_the_stack() {
        let stack = HistoryStack::new();
        let clone = stack.clone();
        clone.push("/shared");

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current().unwrap().url, "/shared");
    }
}
