//! Link and record extraction from fetched pages
//!
//! Two independent passes over a parsed document: harvesting candidate hrefs
//! (optionally filtered by a containment tag), and collecting attribute
//! values for the recorder. Neither pass affects the other.

use scraper::{ElementRef, Html, Selector};

/// Data extracted from one page, handed to the [`Record`](crate::Record)
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// The page the values were extracted from.
    pub uri: String,

    /// Attribute values of matching elements, in document order.
    pub values: Vec<String>,
}

/// Collects the raw `href` values of eligible anchors.
///
/// An anchor is eligible if `contains_tags` is empty, or if it has at least
/// one descendant element whose tag appears in `contains_tags`. Anchors
/// without an `href` attribute contribute nothing. The returned strings are
/// unresolved; callers are expected to run them through
/// [`resolve_ref`](crate::url::resolve_ref).
pub fn extract_links(doc: &Html, contains_tags: &[String]) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(anchors) = Selector::parse("a[href]") {
        for anchor in doc.select(&anchors) {
            if !contains_tags.is_empty() && !contains_any(&anchor, contains_tags) {
                continue;
            }
            if let Some(href) = anchor.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}

/// True if the element has a descendant (not itself) with one of the tags.
fn contains_any(anchor: &ElementRef, tags: &[String]) -> bool {
    anchor
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.id() != anchor.id())
        .any(|el| tags.iter().any(|tag| el.value().name() == tag))
}

/// Collects `attr` values of every element matching one of `tags`, in
/// document order. Returns nothing when no recording is configured.
pub fn extract_records(doc: &Html, tags: &[String], attr: &str) -> Vec<String> {
    if tags.is_empty() || attr.is_empty() {
        return Vec::new();
    }

    let joined = tags.join(", ");
    let selector = match Selector::parse(&joined) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!("unusable record tags {:?}: {}", tags, e);
            return Vec::new();
        }
    };

    doc.select(&selector)
        .filter_map(|el| el.value().attr(attr).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const PAGE: &str = r#"
        <html><body>
            <a href="/plain">text only</a>
            <a href="/pictured"><img src="/thumb.png"/></a>
            <a href="/nested"><span><video src="/clip.mp4"></video></span></a>
            <a>no href here</a>
            <img src="/stray.png"/>
        </body></html>
    "#;

    #[test]
    fn test_no_filter_returns_all_anchors_with_href() {
        let doc = Html::parse_document(PAGE);
        let links = extract_links(&doc, &[]);
        assert_eq!(links, vec!["/plain", "/pictured", "/nested"]);
    }

    #[test]
    fn test_containment_filter_direct_child() {
        let doc = Html::parse_document(PAGE);
        let links = extract_links(&doc, &tags(&["img"]));
        assert_eq!(links, vec!["/pictured"]);
    }

    #[test]
    fn test_containment_filter_deep_descendant() {
        let doc = Html::parse_document(PAGE);
        let links = extract_links(&doc, &tags(&["video"]));
        assert_eq!(links, vec!["/nested"]);
    }

    #[test]
    fn test_containment_filter_any_of_several() {
        let doc = Html::parse_document(PAGE);
        let links = extract_links(&doc, &tags(&["img", "video"]));
        assert_eq!(links, vec!["/pictured", "/nested"]);
    }

    #[test]
    fn test_non_matching_filter_returns_nothing() {
        let doc = Html::parse_document(PAGE);
        let links = extract_links(&doc, &tags(&["table"]));
        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_filter_equals_filter_satisfied_by_every_anchor() {
        let page = r#"
            <html><body>
                <a href="/one"><img src="a.png"/></a>
                <a href="/two"><img src="b.png"/></a>
            </body></html>
        "#;
        let doc = Html::parse_document(page);
        assert_eq!(
            extract_links(&doc, &[]),
            extract_links(&doc, &tags(&["img"]))
        );
    }

    #[test]
    fn test_anchor_does_not_satisfy_filter_with_its_own_tag() {
        let doc = Html::parse_document(r#"<a href="/self">plain</a>"#);
        assert!(extract_links(&doc, &tags(&["a"])).is_empty());
    }

    #[test]
    fn test_extract_records_in_document_order() {
        let doc = Html::parse_document(PAGE);
        let values = extract_records(&doc, &tags(&["img"]), "src");
        assert_eq!(values, vec!["/thumb.png", "/stray.png"]);
    }

    #[test]
    fn test_extract_records_multiple_tags() {
        let doc = Html::parse_document(PAGE);
        let values = extract_records(&doc, &tags(&["img", "video"]), "src");
        assert_eq!(values, vec!["/thumb.png", "/clip.mp4", "/stray.png"]);
    }

    #[test]
    fn test_extract_records_without_configuration() {
        let doc = Html::parse_document(PAGE);
        assert!(extract_records(&doc, &[], "src").is_empty());
        assert!(extract_records(&doc, &tags(&["img"]), "").is_empty());
    }

    #[test]
    fn test_record_pass_does_not_affect_link_discovery() {
        let doc = Html::parse_document(PAGE);
        let before = extract_links(&doc, &[]);
        let _ = extract_records(&doc, &tags(&["img"]), "src");
        assert_eq!(before, extract_links(&doc, &[]));
    }
}
