//! Parsed document state
//!
//! The headless equivalent of the live page: anchors, title, and the quote
//! display element, lifted out of real HTML. Swapping the content region
//! replaces the in-region anchors while chrome anchors survive, which is
//! exactly what the patching library does to the real DOM.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::anchor::Anchor;
use crate::error::DomError;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Every anchor in the document, in document order
    pub anchors: Vec<Anchor>,
    /// Current document title
    pub title: Option<String>,
    /// Text of the quote display element, if the page has one
    pub quote: Option<String>,
    /// Whether the designated swap region exists in the page
    pub has_region: bool,
}

impl Document {
    /// Parse a full HTML page.
    ///
    /// `region_selector` designates the swap region; anchors inside it are
    /// flagged so a later swap can replace them. `quote_selector`, when
    /// given, locates the quote display element.
    pub fn parse(html: &str, region_selector: &str, quote_selector: Option<&str>) -> Result<Self> {
        let page = Html::parse_document(html);

        let anchor_sel = parse_selector("a")?;
        let region_sel = parse_selector(region_selector)?;
        let region_anchor_sel = parse_selector(&format!("{} a", region_selector))?;

        let has_region = page.select(&region_sel).next().is_some();
        if !has_region {
            tracing::warn!(selector = %region_selector, "Swap region not found in document");
        }

        let region_ids: HashSet<_> = page.select(&region_anchor_sel).map(|el| el.id()).collect();

        let anchors = page
            .select(&anchor_sel)
            .map(|el| lift_anchor(&el, region_ids.contains(&el.id())))
            .collect();

        let title_sel = parse_selector("title")?;
        let title = page
            .select(&title_sel)
            .next()
            .map(|el| element_text(&el))
            .filter(|t| !t.is_empty());

        let quote = match quote_selector {
            Some(selector) => {
                let quote_sel = parse_selector(selector)?;
                page.select(&quote_sel).next().map(|el| element_text(&el))
            }
            None => None,
        };

        Ok(Self {
            anchors,
            title,
            quote,
            has_region,
        })
    }

    /// Parse a server-rendered fragment destined for the swap region.
    pub fn parse_region_fragment(html: &str) -> Result<Vec<Anchor>> {
        let fragment = Html::parse_fragment(html);
        let anchor_sel = parse_selector("a")?;
        Ok(fragment
            .select(&anchor_sel)
            .map(|el| lift_anchor(&el, true))
            .collect())
    }

    /// Replace the swap region's anchors with those of an incoming fragment.
    /// Anchors outside the region are untouched. Returns the number of
    /// anchors the fragment brought in.
    pub fn swap_region(&mut self, fragment_html: &str) -> Result<usize> {
        let fresh = Self::parse_region_fragment(fragment_html)?;
        let incoming = fresh.len();

        let before = self.anchors.len();
        self.anchors.retain(|a| !a.in_region);
        let replaced = before - self.anchors.len();
        self.anchors.extend(fresh);

        tracing::debug!(replaced, incoming, "Swapped region content");

        Ok(incoming)
    }

    /// Overwrite the document title
    pub fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    /// Overwrite the quote display element's text
    pub fn set_quote(&mut self, quote: String) {
        self.quote = Some(quote);
    }

    pub fn anchor(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| DomError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn lift_anchor(el: &ElementRef<'_>, in_region: bool) -> Anchor {
    let mut attrs = BTreeMap::new();
    for (name, value) in el.value().attrs() {
        attrs.insert(name.to_string(), value.to_string());
    }
    Anchor::new(attrs, element_text(el), in_region)
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join("").trim().to_string()
}
