use serde::Deserialize;

/// Crawl parameters, loaded once before a crawl starts and immutable for its
/// duration.
///
/// Every field defaults to its zero value, so an empty document is a legal
/// (if conservative) configuration: depth 0, no host restriction, no filters,
/// nothing recorded. Unknown keys in the document are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrawlConfig {
    /// Inclusive maximum traversal depth; the seed is depth 0.
    #[serde(default)]
    pub depth: u32,

    /// Restrict traversal to URIs sharing the seed's hostname.
    #[serde(default)]
    pub same_host: bool,

    /// Containment filter: an anchor's href is followed only if the anchor
    /// has a descendant with one of these tags. Empty means no filter.
    #[serde(default)]
    pub contains_tags: Vec<String>,

    /// Tags whose elements feed the record pass.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Attribute collected from recorded elements.
    #[serde(default)]
    pub attr: String,

    /// Upper bound on concurrently in-flight fetches; 0 means unbounded.
    #[serde(default)]
    pub max_concurrent: usize,
}
