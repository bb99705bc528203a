//! Fuzzy tracker-column lookup.
//!
//! Tag exports rename their tracker headers from time to time ("Click Tag",
//! "Click Tracker Tag", "click_tag (url)"), so the tag file's tracker columns
//! can be located by keyword containment instead of by exact name. Matching is
//! a heuristic: substring containment, first qualifying column wins.

/// Keywords identifying the click-tracker column.
pub const CLICK_TAG_KEYWORDS: &[&str] = &["click", "tag"];
/// Keywords identifying the impression-tracker column.
pub const IMPRESSION_TAG_KEYWORDS: &[&str] = &["impression", "tag"];
/// Both keywords must appear.
pub const DEFAULT_THRESHOLD: usize = 2;

/// All columns whose lowercased name contains at least `threshold` of the
/// (lowercase) `keywords`, in declared order.
pub fn candidates<'a>(columns: &'a [String], keywords: &[&str], threshold: usize) -> Vec<&'a str> {
    columns
        .iter()
        .filter(|col| {
            let lower = col.to_lowercase();
            keywords.iter().filter(|kw| lower.contains(*kw)).count() >= threshold
        })
        .map(String::as_str)
        .collect()
}

/// First column satisfying `threshold` keyword hits, or `None`.
///
/// When several columns qualify the choice is logged, since the first match
/// may not be the intended one on exports with near-duplicate tracker columns.
pub fn resolve_column<'a>(
    columns: &'a [String],
    keywords: &[&str],
    threshold: usize,
) -> Option<&'a str> {
    let found = candidates(columns, keywords, threshold);
    if found.len() > 1 {
        tracing::warn!(
            "keywords {:?} match {} columns {:?}; using '{}'",
            keywords,
            found.len(),
            found,
            found[0]
        );
    }
    found.first().copied()
}
