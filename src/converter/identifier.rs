//! Derive Avro record names and namespaces from a schema `id` URL.

use url::Url;

fn path_segments(url: &Url) -> Vec<&str> {
    url.path().split('/').filter(|s| !s.is_empty()).collect()
}

/// Derive the record name from a schema `id`.
///
/// The name is the final URL path segment with dots replaced by
/// underscores (`bar.json` becomes `bar_json`). Returns `None` when the
/// `id` is not a parseable URL or has no path segments; the caller falls
/// back to the default root name.
pub fn name_from_id(id: &str) -> Option<String> {
    let url = Url::parse(id).ok()?;
    let segments = path_segments(&url);
    segments.last().map(|s| s.replace('.', "_"))
}

/// Derive the record namespace from a schema `id`.
///
/// The host is split on `.` and reversed (reverse-DNS convention, so
/// `schemas.example.com` becomes `com.example.schemas`), then every path
/// segment except the final one is appended with dots replaced by
/// underscores. Returns `None` when neither host nor path yields any
/// segment, in which case the output record carries no `namespace` key.
pub fn namespace_from_id(id: &str) -> Option<String> {
    let url = Url::parse(id).ok()?;
    let mut parts: Vec<String> = Vec::new();
    if let Some(host) = url.host_str() {
        parts.extend(host.split('.').rev().map(str::to_string));
    }
    let segments = path_segments(&url);
    if segments.len() > 1 {
        parts.extend(
            segments[..segments.len() - 1]
                .iter()
                .map(|s| s.replace('.', "_")),
        );
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}
