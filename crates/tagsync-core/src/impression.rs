//! Impression pixel URL extraction from tag snippets.

use std::sync::OnceLock;

use regex::Regex;

fn quoted_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(.*?)"|'(.*?)'"#).expect("static regex"))
}

/// Returns the contents of the first quoted literal in `tag_text`.
///
/// `<img src="https://ad.example/imp.gif">` yields `https://ad.example/imp.gif`.
/// Single and double quotes are both accepted; the closing quote must match
/// the opening one. Only the leftmost literal is considered.
pub fn extract(tag_text: Option<&str>) -> Option<String> {
    let caps = quoted_literal().captures(tag_text?)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
