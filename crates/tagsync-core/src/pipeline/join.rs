//! Left join of ad rows onto tag rows by (campaign, ad group/placement, ad name).

use std::collections::HashMap;

use crate::table::{Table, Value};

/// Normalized join key: string-cast, null as empty, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct JoinKey([String; 3]);

impl JoinKey {
    pub fn from_row(row: &[Value], columns: [usize; 3]) -> Self {
        JoinKey(columns.map(|c| row[c].to_key_string().trim().to_string()))
    }
}

/// Tracker values carried over from one tag row.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct TagMatch {
    pub click_tag: Option<String>,
    pub impression_tag: Option<String>,
}

/// Tag rows grouped by join key, in tag-file order.
#[derive(Debug, Default)]
pub(crate) struct TagIndex {
    by_key: HashMap<JoinKey, Vec<TagMatch>>,
}

impl TagIndex {
    pub fn build(tags: &Table, keys: [usize; 3], click_tag: usize, impression_tag: usize) -> Self {
        let mut by_key: HashMap<JoinKey, Vec<TagMatch>> = HashMap::new();
        for row in tags.rows() {
            by_key
                .entry(JoinKey::from_row(row, keys))
                .or_default()
                .push(TagMatch {
                    click_tag: row[click_tag].as_text(),
                    impression_tag: row[impression_tag].as_text(),
                });
        }

        let duplicated = by_key.values().filter(|m| m.len() > 1).count();
        if duplicated > 0 {
            tracing::warn!(
                "{} tag keys appear more than once; matching ad rows will be repeated",
                duplicated
            );
        }
        Self { by_key }
    }

    /// Every tag row for `key`; empty when the ad row has no match.
    pub fn lookup(&self, key: &JoinKey) -> &[TagMatch] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
