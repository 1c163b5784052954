//! Brand domain normalization and link matching.
//!
//! This module provides the two pure functions the rank resolver is built on:
//! - `normalize_brand_domain()` - Reduces a brand URL to its bare host
//! - `link_matches()` - The (substring) rule deciding whether a result link is the brand's
//!
//! Matching is substring containment, not host equality: `abc.com` matches
//! `https://sub.abc.com/x` and also `https://notabc.com.evil.net`. This is a
//! known limitation kept so that recorded ranks stay comparable over time.

/// Normalizes a brand URL into its brand domain.
///
/// Lower-cases the input, strips the scheme, any userinfo, the port, the path,
/// and any leading `www.` labels. The scheme is optional: `https://www.example.com/path`,
/// `http://example.com` and `example.com` all yield `example.com`.
///
/// Returns an empty string when no host can be found (e.g. `""` or `"https://"`).
/// Already-normalized strings are fixed points.
pub fn normalize_brand_domain(brand_url: &str) -> String {
    let lowered = brand_url.trim().to_lowercase();

    let candidate = if lowered.contains("://") {
        lowered.clone()
    } else {
        format!("https://{lowered}")
    };

    // The URL parser punycode-encodes non-ASCII hosts; links are matched
    // against the literal text, so those keep the raw host.
    let parsed = if lowered.is_ascii() {
        url::Url::parse(&candidate)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
    } else {
        None
    };
    let host = parsed.unwrap_or_else(|| raw_host(&lowered));

    let mut host = host.as_str();
    while let Some(rest) = host.strip_prefix("www.") {
        host = rest;
    }
    host.to_string()
}

/// Host extraction for non-ASCII inputs and inputs the URL parser rejects.
fn raw_host(lowered: &str) -> String {
    let without_scheme = match lowered.find("://") {
        Some(idx) => &lowered[idx + 3..],
        None => lowered,
    };
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    host_port
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Returns true if `link` belongs to `brand_domain`.
///
/// Case-insensitive substring containment. An empty brand domain never
/// matches, so an unusable brand URL resolves to not-found instead of
/// matching the first result.
pub fn link_matches(brand_domain: &str, link: &str) -> bool {
    !brand_domain.is_empty() && link.to_lowercase().contains(brand_domain)
}
