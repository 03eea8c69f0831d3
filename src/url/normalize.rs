use crate::{ResolveError, ResolveResult};
use url::Url;

/// Normalizes a URL string.
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Lowercase the host and remove any `www.` prefix
/// 3. Normalize the path:
///    - Remove dot segments (`.` and `..`)
///    - Collapse duplicate slashes
///    - Remove the trailing slash (except for the root `/`)
/// 4. Remove the fragment
/// 5. Sort query parameters and drop an empty query string
///
/// Default ports and percent-encoding case are already canonicalized by the
/// `url` crate's parser. Normalization is idempotent: applying it to its own
/// output yields the same URI.
///
/// # Examples
///
/// ```
/// use linkwave::url::normalize_url;
///
/// let url = normalize_url("http://WWW.Example.COM/a/../page/#top").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/page");
/// ```
pub fn normalize_url(url_str: &str) -> ResolveResult<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| ResolveError::InvalidReference(format!("{}: {}", url_str, e)))?;
    scrub(url)
}

/// Applies the normalization steps to an already-parsed URL.
pub(crate) fn scrub(mut url: Url) -> ResolveResult<Url> {
    if let Some(host) = url.host_str() {
        let mut host = host.to_lowercase();
        if let Some(bare) = host.strip_prefix("www.") {
            if !bare.is_empty() {
                host = bare.to_string();
            }
        }
        url.set_host(Some(&host))
            .map_err(|e| ResolveError::InvalidReference(format!("bad host {}: {}", host, e)))?;

        let cleaned = normalize_path(url.path());
        url.set_path(&cleaned);
    }

    url.set_fragment(None);

    if url.query().is_some() {
        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        pairs.sort();

        url.set_query(None);
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in &pairs {
                serializer.append_pair(key, value);
            }
        }
    }

    Ok(url)
}

/// Removes dot segments and duplicate/trailing slashes from a path.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            // empty segments come from duplicate slashes
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return "/".to_string();
    }

    format!("/{}", segments.join("/"))
}
