//! Click URL rewriting: tracker prefix + attribution parameters.

use crate::config::AttributionConfig;

use super::parts::UrlParts;
use super::query::QueryParams;

/// Rewrite a click URL with the default attribution values.
///
/// See [`rewrite_with`].
pub fn rewrite(original_url: Option<&str>, tracker_prefix: Option<&str>, campaign_name: &str) -> String {
    rewrite_with(
        original_url,
        tracker_prefix,
        campaign_name,
        &AttributionConfig::default(),
    )
}

/// Prefix `original_url` with `tracker_prefix` (plain concatenation) and force
/// the six attribution parameters onto the result.
///
/// A parameter that is missing is appended; one whose first value differs
/// from the canonical value is replaced by that single value. Everything
/// outside the query string is left as-is. Never fails: input that is not a
/// well-formed URL is split best-effort.
pub fn rewrite_with(
    original_url: Option<&str>,
    tracker_prefix: Option<&str>,
    campaign_name: &str,
    attribution: &AttributionConfig,
) -> String {
    let original = original_url.unwrap_or("");
    let working = match tracker_prefix {
        Some(prefix) => format!("{prefix}{original}"),
        None => original.to_string(),
    };

    let parts = UrlParts::split(&working);
    let mut params = QueryParams::parse(parts.query.unwrap_or(""));

    for (key, value) in attribution.canonical_params(campaign_name) {
        if params.first(key) != Some(value) {
            params.set(key, value);
        }
    }

    parts.join_with_query(Some(params.encode().as_str()))
}
