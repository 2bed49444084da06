//! Anchor classification and wiring
//!
//! One pass over the document's anchors: resolve each href against the
//! page URL, compare true origins, then either write the partial
//! navigation directives or point the anchor at a new browsing context.

use url::Url;

use pivot_dom::{Anchor, Document, ATTR_FETCH, ATTR_REGION, ATTR_SWAP, ATTR_TRIGGER};
use pivot_events::Patcher;

use crate::config::Config;

/// How one anchor relates to the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClass {
    /// Same scheme, host, and port; carries the resolved absolute URL
    SameOrigin(Url),
    /// Different origin, to be opened in a new browsing context
    CrossOrigin,
    /// Raw scheme-prefixed href the server already rendered as external
    ServerHandled,
    /// Missing or unresolvable href, left untouched
    Unresolvable,
}

/// Classify an anchor against the page URL.
pub fn classify(anchor: &Anchor, page_url: &Url, config: &Config) -> LinkClass {
    let href = match anchor.href() {
        Some(href) => href,
        None => return LinkClass::Unresolvable,
    };

    let resolved = match page_url.join(href) {
        Ok(url) => url,
        Err(_) => return LinkClass::Unresolvable,
    };

    if resolved.origin() != page_url.origin() {
        if config.exempt_external && is_server_rendered_external(href) {
            return LinkClass::ServerHandled;
        }
        return LinkClass::CrossOrigin;
    }

    LinkClass::SameOrigin(resolved)
}

/// Raw hrefs the server-side renderer already pointed at a new browsing
/// context. Rewriting them again would be redundant.
fn is_server_rendered_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Tally of one classify-and-wire pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireSummary {
    /// Anchors newly wired for partial navigation
    pub wired: usize,
    /// Anchors pointed at a new browsing context
    pub retargeted: usize,
    /// Anchors already carrying the trigger marker
    pub already_wired: usize,
    /// Anchors left to the server-rendered external handling
    pub exempted: usize,
    /// Anchors with no resolvable target
    pub skipped: usize,
}

/// Classify every anchor and wire it accordingly: same-origin anchors get
/// the four navigation directives and a processing pass from the patching
/// library, cross-origin anchors get retargeted. Anchors already carrying
/// the trigger marker are left as they are, so repeated passes after each
/// swap stay idempotent.
pub fn wire_document(
    document: &mut Document,
    page_url: &Url,
    config: &Config,
    patcher: &dyn Patcher,
) -> WireSummary {
    let mut summary = WireSummary::default();

    for anchor in document.anchors.iter_mut() {
        match classify(anchor, page_url, config) {
            LinkClass::Unresolvable => {
                tracing::debug!(anchor_id = %anchor.id, "Anchor without resolvable target");
                summary.skipped += 1;
            }
            LinkClass::ServerHandled => {
                summary.exempted += 1;
            }
            LinkClass::CrossOrigin => {
                anchor.open_in_new_context();
                summary.retargeted += 1;
            }
            LinkClass::SameOrigin(resolved) => {
                if !config.intercept {
                    continue;
                }
                if anchor.is_wired() {
                    summary.already_wired += 1;
                    continue;
                }
                anchor.set_attr(ATTR_FETCH, resolved.as_str());
                anchor.set_attr(ATTR_TRIGGER, &config.trigger);
                anchor.set_attr(ATTR_REGION, &config.target_region);
                anchor.set_attr(ATTR_SWAP, &config.swap_style);
                patcher.process(&anchor.id);
                summary.wired += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivot_dom::TARGET_NEW_CONTEXT;
    use pivot_events::RecordingPatcher;

    fn page_url() -> Url {
        Url::parse("https://site.example/logs/").unwrap()
    }

    fn anchor(href: &str) -> Anchor {
        Anchor::with_href(href)
    }

    #[test]
    fn test_classify_relative_href_as_same_origin() {
        let class = classify(&anchor("/about"), &page_url(), &Config::standard());
        match class {
            LinkClass::SameOrigin(url) => {
                assert_eq!(url.as_str(), "https://site.example/about");
            }
            other => panic!("unexpected class: {:?}", other),
        }
    }

    #[test]
    fn test_classify_resolves_against_page_path() {
        let class = classify(&anchor("first-entry"), &page_url(), &Config::standard());
        match class {
            LinkClass::SameOrigin(url) => {
                assert_eq!(url.as_str(), "https://site.example/logs/first-entry");
            }
            other => panic!("unexpected class: {:?}", other),
        }
    }

    #[test]
    fn test_classify_cross_origin() {
        let class = classify(
            &anchor("https://elsewhere.example/post"),
            &page_url(),
            &Config::standard(),
        );
        assert_eq!(class, LinkClass::CrossOrigin);
    }

    #[test]
    fn test_classify_rejects_origin_prefix_impostor() {
        // A host that merely starts with the page origin is still foreign
        let class = classify(
            &anchor("https://site.example.evil.example/steal"),
            &page_url(),
            &Config::standard(),
        );
        assert_eq!(class, LinkClass::CrossOrigin);
    }

    #[test]
    fn test_classify_port_difference_is_cross_origin() {
        let class = classify(
            &anchor("https://site.example:8443/admin"),
            &page_url(),
            &Config::standard(),
        );
        assert_eq!(class, LinkClass::CrossOrigin);
    }

    #[test]
    fn test_classify_exempts_scheme_prefixed_href_when_configured() {
        let external = anchor("https://elsewhere.example/post");
        assert_eq!(
            classify(&external, &page_url(), &Config::extended()),
            LinkClass::ServerHandled
        );
        // Without the exemption the same anchor is plain cross-origin
        assert_eq!(
            classify(&external, &page_url(), &Config::standard()),
            LinkClass::CrossOrigin
        );
    }

    #[test]
    fn test_classify_exemption_spares_same_origin_absolute_hrefs() {
        // Scheme-prefixed but same origin stays interceptable
        let class = classify(
            &anchor("https://site.example/logs/second"),
            &page_url(),
            &Config::extended(),
        );
        assert!(matches!(class, LinkClass::SameOrigin(_)));
    }

    #[test]
    fn test_classify_mailto_is_cross_origin() {
        let class = classify(&anchor("mailto:sam@site.example"), &page_url(), &Config::extended());
        assert_eq!(class, LinkClass::CrossOrigin);
    }

    #[test]
    fn test_classify_anchor_without_href() {
        let bare = Anchor::new(Default::default(), "bare", true);
        assert_eq!(
            classify(&bare, &page_url(), &Config::standard()),
            LinkClass::Unresolvable
        );
    }

    #[test]
    fn test_classify_malformed_href() {
        // "http://" has no host, so resolution fails before any origin check
        let broken = anchor("http://");
        assert_eq!(
            classify(&broken, &page_url(), &Config::standard()),
            LinkClass::Unresolvable
        );
        // The scheme-prefix exemption never applies to an unresolvable href
        assert_eq!(
            classify(&broken, &page_url(), &Config::extended()),
            LinkClass::Unresolvable
        );
    }

    fn document_with(anchors: Vec<Anchor>) -> Document {
        let mut document = Document::default();
        document.anchors = anchors;
        document.has_region = true;
        document
    }

    #[test]
    fn test_wire_writes_directives_and_processes() {
        let mut document = document_with(vec![anchor("/about")]);
        let patcher = RecordingPatcher::new();

        let summary = wire_document(&mut document, &page_url(), &Config::standard(), &patcher);

        assert_eq!(summary.wired, 1);
        let wired = &document.anchors[0];
        assert_eq!(wired.attr(ATTR_FETCH), Some("https://site.example/about"));
        assert_eq!(wired.attr(ATTR_TRIGGER), Some("click"));
        assert_eq!(wired.attr(ATTR_REGION), Some("#content"));
        assert_eq!(wired.attr(ATTR_SWAP), Some("outerHTML show:top"));
        assert_eq!(patcher.process_count(&wired.id), 1);
    }

    #[test]
    fn test_wire_retargets_cross_origin_without_directives() {
        let mut document = document_with(vec![anchor("https://elsewhere.example/post")]);
        let patcher = RecordingPatcher::new();

        let summary = wire_document(&mut document, &page_url(), &Config::standard(), &patcher);

        assert_eq!(summary.retargeted, 1);
        let retargeted = &document.anchors[0];
        assert_eq!(retargeted.target(), Some(TARGET_NEW_CONTEXT));
        assert_eq!(retargeted.attr(ATTR_FETCH), None);
        assert!(patcher.processed().is_empty());
    }

    #[test]
    fn test_wire_is_idempotent() {
        let mut document = document_with(vec![anchor("/about")]);
        let patcher = RecordingPatcher::new();

        wire_document(&mut document, &page_url(), &Config::standard(), &patcher);
        let fetch_before = document.anchors[0].attr(ATTR_FETCH).map(str::to_string);
        let second = wire_document(&mut document, &page_url(), &Config::standard(), &patcher);

        assert_eq!(second.wired, 0);
        assert_eq!(second.already_wired, 1);
        assert_eq!(
            document.anchors[0].attr(ATTR_FETCH).map(str::to_string),
            fetch_before
        );
        assert_eq!(patcher.process_count(&document.anchors[0].id), 1);
    }

    #[test]
    fn test_wire_exempted_anchor_is_untouched() {
        let mut document = document_with(vec![anchor("https://elsewhere.example/post")]);
        let patcher = RecordingPatcher::new();

        let summary = wire_document(&mut document, &page_url(), &Config::extended(), &patcher);

        assert_eq!(summary.exempted, 1);
        let exempted = &document.anchors[0];
        assert_eq!(exempted.target(), None);
        assert_eq!(exempted.attr(ATTR_FETCH), None);
    }

    #[test]
    fn test_wire_without_interception_only_retargets() {
        let mut document = document_with(vec![
            anchor("/about"),
            anchor("https://elsewhere.example/post"),
        ]);
        let patcher = RecordingPatcher::new();

        let summary =
            wire_document(&mut document, &page_url(), &Config::retarget_only(), &patcher);

        assert_eq!(summary.wired, 0);
        assert_eq!(summary.retargeted, 1);
        assert_eq!(document.anchors[0].attr(ATTR_FETCH), None);
        assert_eq!(document.anchors[1].target(), Some(TARGET_NEW_CONTEXT));
        assert!(patcher.processed().is_empty());
    }

    #[test]
    fn test_wire_skips_unresolvable_anchor() {
        let mut document = document_with(vec![Anchor::new(Default::default(), "bare", true)]);
        let patcher = RecordingPatcher::new();

        let summary = wire_document(&mut document, &page_url(), &Config::standard(), &patcher);

        assert_eq!(summary.skipped, 1);
        assert_eq!(document.anchors[0].target(), None);
        assert_eq!(document.anchors[0].attr(ATTR_FETCH), None);
    }

    #[test]
    fn test_wire_skips_malformed_href() {
        let mut document = document_with(vec![anchor("http://")]);
        let patcher = RecordingPatcher::new();

        let summary = wire_document(&mut document, &page_url(), &Config::standard(), &patcher);

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.wired, 0);
        assert_eq!(document.anchors[0].target(), None);
        assert_eq!(document.anchors[0].attr(ATTR_FETCH), None);
        assert!(patcher.processed().is_empty());
    }
}
