//! Anchor element model
//!
//! Each anchor carries the full attribute map it was parsed with. The
//! navigation directives the enhancer writes live in the same map, so an
//! anchor is its own record of whether it has been wired.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Directive telling the patching library which URL to fetch.
pub const ATTR_FETCH: &str = "hx-get";
/// Directive naming the DOM event that starts a partial navigation.
/// Doubles as the interception marker: an anchor carrying it is wired.
pub const ATTR_TRIGGER: &str = "hx-trigger";
/// Directive selecting the region the response replaces.
pub const ATTR_REGION: &str = "hx-target";
/// Directive describing swap and scroll behavior.
pub const ATTR_SWAP: &str = "hx-swap";
/// Plain HTML browsing-context target attribute.
pub const ATTR_TARGET: &str = "target";
/// Target value opening a new browsing context.
pub const TARGET_NEW_CONTEXT: &str = "_blank";

/// A single anchor element lifted out of a parsed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anchor {
    /// Unique identifier (used when registering with the patching library)
    pub id: String,
    /// Visible text content
    pub text: String,
    /// Whether the anchor sits inside the designated swap region
    pub in_region: bool,
    /// Full attribute map, navigation directives included
    pub attrs: BTreeMap<String, String>,
}

impl Anchor {
    pub fn new(attrs: BTreeMap<String, String>, text: impl Into<String>, in_region: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            in_region,
            attrs,
        }
    }

    /// Build a bare anchor from an href alone.
    pub fn with_href(href: impl Into<String>) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("href".to_string(), href.into());
        Self::new(attrs, String::new(), false)
    }

    pub fn href(&self) -> Option<&str> {
        self.attr("href")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    pub fn target(&self) -> Option<&str> {
        self.attr(ATTR_TARGET)
    }

    /// Point the anchor at a new browsing context.
    pub fn open_in_new_context(&mut self) {
        self.set_attr(ATTR_TARGET, TARGET_NEW_CONTEXT);
    }

    /// An anchor carrying the trigger directive is already wired for
    /// partial navigation and must not be processed again.
    pub fn is_wired(&self) -> bool {
        self.has_attr(ATTR_TRIGGER)
    }

    /// Render the anchor back to an HTML tag: href first, remaining
    /// attributes in name order.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<a");
        if let Some(href) = self.href() {
            out.push_str(" href=\"");
            out.push_str(&escape_html(href));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            if name == "href" {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        out.push_str(&escape_html(&self.text));
        out.push_str("</a>");
        out
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
