use crate::error::{Result, ScanError};
use url::Url;

/// Scheme and authority of `link` with a trailing slash, e.g.
/// `https://x.example/blog/post?a=1` -> `https://x.example/`.
///
/// This is the base every href found on the page at `link` is resolved
/// against.
pub fn domain_of(link: &str) -> Result<Url> {
    let parsed =
        Url::parse(link).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", link, e)))?;

    if parsed.cannot_be_a_base() {
        return Err(ScanError::InvalidUrl(format!("{}: not a base URL", link)));
    }

    let domain = format!("{}://{}/", parsed.scheme(), parsed.authority());
    Url::parse(&domain).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", domain, e)))
}

/// Joins `href` onto `domain`.
///
/// Absolute hrefs come back byte-for-byte as written; relative ones
/// (path, query, fragment or protocol-relative) are joined per RFC 3986.
/// Returns `None` when the href cannot be joined at all.
pub fn resolve_relative(domain: &Url, href: &str) -> Option<String> {
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    domain.join(href).ok().map(String::from)
}

/// Whether `link` looks like something the HTTP transport can fetch.
/// Not consulted by the traversal; links that fail here simply fail to fetch.
pub fn is_valid_link(link: &str) -> bool {
    link.starts_with("http")
}
