//! URL handling for linkwave
//!
//! This module normalizes and resolves candidate links against the page they
//! were found on, and decides which of them are eligible for crawling.

mod normalize;

use crate::{ResolveError, ResolveResult};
use url::Url;

pub use normalize::normalize_url;

/// Resolves a reference found on a page against that page's URI.
///
/// Both `base` and `reference` are normalized (see [`normalize_url`]) before
/// the reference is resolved relative to the base. A successful resolution
/// yields a fully normalized absolute URL.
///
/// Rejections:
/// - [`ResolveError::InvalidReference`] if either side cannot be parsed
/// - [`ResolveError::NoHostname`] if the resolved URI has no host component
///   (`mailto:`, `javascript:` schemes, fragment-only or empty references)
/// - [`ResolveError::CrossHost`] if `same_host` is set and the resolved host
///   differs from the base host
///
/// This is a pure function with no shared state; it is safe to call from any
/// number of tasks concurrently.
///
/// # Examples
///
/// ```
/// use linkwave::url::resolve_ref;
///
/// let link = resolve_ref("http://a.test/dir/page", "/other", false).unwrap();
/// assert_eq!(link.as_str(), "http://a.test/other");
///
/// assert!(resolve_ref("http://a.test/", "http://b.test/x", true).is_err());
/// ```
pub fn resolve_ref(base: &str, reference: &str, same_host: bool) -> ResolveResult<Url> {
    let base_url = normalize_url(base)?;

    let reference = reference.trim();
    // fragment-only and empty references resolve back to the base page and
    // carry no hostname of their own
    if reference.split('#').next().unwrap_or("").is_empty() {
        return Err(ResolveError::NoHostname(reference.to_string()));
    }

    let joined = base_url
        .join(reference)
        .map_err(|e| ResolveError::InvalidReference(format!("{}: {}", reference, e)))?;
    let resolved = normalize::scrub(joined)?;

    let host = match resolved.host_str() {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => return Err(ResolveError::NoHostname(resolved.to_string())),
    };

    if same_host && base_url.host_str() != Some(host.as_str()) {
        return Err(ResolveError::CrossHost {
            host,
            base: base_url.host_str().unwrap_or_default().to_string(),
        });
    }

    Ok(resolved)
}
