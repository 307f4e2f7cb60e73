//! API utilities for frontend-backend communication
//!
//! Resolves the origin of the analytics backend.

/// Name of the `<meta>` tag that overrides the API origin.
pub const API_BASE_META: &str = "api-base";

/// Get the base URL for API requests
///
/// Reads `<meta name="api-base" content="...">` from the host page. Without
/// the tag the dashboard talks to the origin that served it, so the base is
/// empty and every path stays relative.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/data/kpis", api_base());
/// ```
pub fn api_base() -> String {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return String::new();
    };
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|content| normalize_base(&content))
        .unwrap_or_default()
}

/// Build a full API URL from a base and a path
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
