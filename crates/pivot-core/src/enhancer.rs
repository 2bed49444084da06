//! Navigation enhancer engine
//!
//! Central state holder in front of the live document, the history stack,
//! and the patching library. A host parses the initial page, builds the
//! enhancer, runs `initialize`, then drives it through the lifecycle bus:
//! `before_swap` reviews each response, the host applies approved swaps,
//! and `after_settle` synchronizes title, quote, history, and wiring.

use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;

use pivot_dom::Document;
use pivot_events::{EventBus, Patcher, RecordingPatcher, SettleEvent, StatusCode, SwapReview};
use pivot_history::HistoryStack;

use crate::config::Config;
use crate::error::CoreError;
use crate::wire::{wire_document, WireSummary};
use crate::Result;

pub struct Enhancer {
    config: Config,
    /// Effective page location; settled navigations move it
    location: Arc<RwLock<Url>>,
    document: Arc<RwLock<Document>>,
    history: HistoryStack,
    patcher: Arc<dyn Patcher>,
}

impl Enhancer {
    /// Build an enhancer over an already parsed document, with the
    /// recording patcher standing in for the real library.
    pub fn new(config: Config, document: Document, page_url: Url) -> Result<Self> {
        Self::with_patcher(config, document, page_url, Arc::new(RecordingPatcher::new()))
    }

    /// Build an enhancer wired to a host-provided patching library.
    pub fn with_patcher(
        config: Config,
        document: Document,
        page_url: Url,
        patcher: Arc<dyn Patcher>,
    ) -> Result<Self> {
        if config.quote_header.is_some() != config.quote_selector.is_some() {
            return Err(CoreError::Config(
                "quote sync needs both a header name and a selector".to_string(),
            ));
        }

        Ok(Self {
            config,
            location: Arc::new(RwLock::new(page_url)),
            document: Arc::new(RwLock::new(document)),
            history: HistoryStack::new(),
            patcher,
        })
    }

    /// Parse a page and build an enhancer over it, scanning the regions the
    /// configuration names.
    pub fn from_html(config: Config, html: &str, page_url: Url) -> Result<Self> {
        let document = Document::parse(html, &config.target_region, config.quote_selector.as_deref())?;
        Self::new(config, document, page_url)
    }

    /// Apply the library knobs and run the first classify-and-wire pass.
    pub fn initialize(&self) -> WireSummary {
        self.patcher
            .set_refresh_on_history_miss(self.config.refresh_on_history_miss);
        let summary = self.enhance();
        tracing::info!(
            wired = summary.wired,
            retargeted = summary.retargeted,
            exempted = summary.exempted,
            "Enhancer initialized"
        );
        summary
    }

    /// Classify and wire the live document against the current location.
    pub fn enhance(&self) -> WireSummary {
        let location = self.location.read().clone();
        let mut document = self.document.write();
        wire_document(&mut document, &location, &self.config, self.patcher.as_ref())
    }

    /// Replace the swap region with an approved response fragment. Returns
    /// the number of anchors the fragment brought in.
    pub fn apply_swap(&self, fragment_html: &str) -> Result<usize> {
        Ok(self.document.write().swap_region(fragment_html)?)
    }

    /// Review a response before its body is swapped in. With not-found
    /// rendering on, a 404 page is forced through as ordinary content.
    pub fn before_swap(&self, review: &mut SwapReview) {
        if !self.config.render_not_found {
            return;
        }
        if review.status == StatusCode::NOT_FOUND {
            review.should_swap = true;
            review.is_error = false;
            tracing::debug!("Rendering not-found response as content");
        }
    }

    /// Handle the after-settle signal: synchronize title and quote from the
    /// response headers, push the final location, rewire the document. A
    /// settle without a response leaves every piece of state untouched.
    pub fn after_settle(&self, event: &SettleEvent) -> Result<()> {
        let response = match event.response.as_ref() {
            Some(response) => response,
            None => {
                tracing::debug!("Settle without a response, nothing to synchronize");
                return Ok(());
            }
        };

        if let Some(title) = response.decoded_header(&self.config.title_header) {
            if !title.is_empty() {
                self.document.write().set_title(title);
            }
        }

        if let Some(header) = self.config.quote_header.as_deref() {
            if let Some(quote) = response.decoded_header(header) {
                if !quote.is_empty() {
                    self.document.write().set_quote(decorate_quote(&quote));
                }
            }
        }

        let resolved = self.location.read().join(&event.final_path)?;
        self.history.push(resolved.as_str());
        *self.location.write() = resolved;

        let summary = self.enhance();
        tracing::debug!(
            path = %event.final_path,
            wired = summary.wired,
            "Settled partial navigation"
        );

        Ok(())
    }

    /// Subscribe the enhancer's two handlers on a lifecycle bus.
    pub fn install(&self, bus: &EventBus) {
        let engine = self.clone();
        bus.on_before_swap(move |review| engine.before_swap(review));

        let engine = self.clone();
        bus.on_after_settle(move |event| {
            if let Err(e) = engine.after_settle(event) {
                tracing::warn!(error = %e, "After-settle handling failed");
            }
        });
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current effective location.
    pub fn location(&self) -> Url {
        self.location.read().clone()
    }

    pub fn title(&self) -> Option<String> {
        self.document.read().title.clone()
    }

    pub fn quote(&self) -> Option<String> {
        self.document.read().quote.clone()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Point-in-time copy of the live document.
    pub fn document(&self) -> Document {
        self.document.read().clone()
    }
}

impl Clone for Enhancer {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            location: Arc::clone(&self.location),
            document: Arc::clone(&self.document),
            history: self.history.clone(),
            patcher: Arc::clone(&self.patcher),
        }
    }
}

/// Wrap a quote in guillemets with thin spaces.
fn decorate_quote(quote: &str) -> String {
    format!("\u{ab}\u{2009}{}\u{2009}\u{bb}", quote)
}
