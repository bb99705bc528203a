//! Join & project pipeline.
//!
//! load → validate → normalize keys → left join → rewrite click URL and
//! derive the impression URL → keep only the ad-export columns (plus
//! `Impression tracking URL`).
//!
//! The run is all-or-nothing: every check happens before any row is built,
//! and the output table is returned only once complete.

mod join;
mod schema;

use crate::config::TagsyncConfig;
use crate::error::{Result, SourceRole};
use crate::impression;
use crate::loader::{self, InputFile};
use crate::table::{Table, Value};
use crate::url_model;

use join::{JoinKey, TagIndex, TagMatch};
use schema::{AdColumns, TagColumns};

pub const CAMPAIGN_NAME: &str = "Campaign Name";
pub const AD_GROUP_NAME: &str = "Ad Group Name";
pub const PLACEMENT_NAME: &str = "Placement Name";
pub const AD_NAME: &str = "Ad Name";
pub const IMPRESSION_TRACKING_URL: &str = "Impression tracking URL";

/// Row accounting for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinStats {
    pub ad_rows: usize,
    /// Ad rows with at least one tag match.
    pub matched: usize,
    pub unmatched: usize,
    pub output_rows: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    pub table: Table,
    pub stats: JoinStats,
}

/// Join `ads` with `tags` and rewrite the click URLs.
pub fn process(ads: &Table, tags: &Table, cfg: &TagsyncConfig) -> Result<Table> {
    process_detailed(ads, tags, cfg).map(|out| out.table)
}

/// Load both inputs and run the pipeline.
pub fn process_files(ads: &InputFile, tags: &InputFile, cfg: &TagsyncConfig) -> Result<ProcessOutput> {
    let ad_table = loader::load_table(ads, SourceRole::Ads, cfg)?;
    let tag_table = loader::load_table(tags, SourceRole::Tags, cfg)?;
    process_detailed(&ad_table, &tag_table, cfg)
}

/// [`process`] plus match statistics.
pub fn process_detailed(ads: &Table, tags: &Table, cfg: &TagsyncConfig) -> Result<ProcessOutput> {
    let ad_cols = AdColumns::resolve(ads, &cfg.ads)?;
    let tag_cols = TagColumns::resolve(tags, &cfg.tags)?;
    let index = TagIndex::build(tags, tag_cols.keys(), tag_cols.click_tag, tag_cols.impression_tag);

    let mut columns = ads.columns().to_vec();
    let impression_col = match ads.column_index(IMPRESSION_TRACKING_URL) {
        Some(i) => i,
        None => {
            columns.push(IMPRESSION_TRACKING_URL.to_string());
            columns.len() - 1
        }
    };

    let mut stats = JoinStats {
        ad_rows: ads.len(),
        ..JoinStats::default()
    };
    let mut rows = Vec::with_capacity(ads.len());

    for ad_row in ads.rows() {
        let mut base = ad_row.clone();
        base.resize(columns.len(), Value::Null);
        for c in ad_cols.keys() {
            base[c] = Value::Text(base[c].to_key_string());
        }

        let hits = index.lookup(&JoinKey::from_row(&base, ad_cols.keys()));
        if hits.is_empty() {
            stats.unmatched += 1;
            rows.push(transform_row(base, None, &ad_cols, impression_col, cfg));
        } else {
            stats.matched += 1;
            for hit in hits {
                rows.push(transform_row(base.clone(), Some(hit), &ad_cols, impression_col, cfg));
            }
        }
    }

    stats.output_rows = rows.len();
    tracing::info!(
        "processed {} ad rows: {} matched, {} unmatched, {} output rows",
        stats.ad_rows,
        stats.matched,
        stats.unmatched,
        stats.output_rows
    );

    Ok(ProcessOutput {
        table: Table::new(columns, rows),
        stats,
    })
}

fn transform_row(
    mut row: Vec<Value>,
    hit: Option<&TagMatch>,
    ad_cols: &AdColumns,
    impression_col: usize,
    cfg: &TagsyncConfig,
) -> Vec<Value> {
    let campaign = row[ad_cols.campaign].to_key_string();
    let original_url = row[ad_cols.click_url].as_text();
    let tracker = hit.and_then(|h| h.click_tag.as_deref());

    row[ad_cols.click_url] = Value::Text(url_model::rewrite_with(
        original_url.as_deref(),
        tracker,
        &campaign,
        &cfg.attribution,
    ));
    row[impression_col] = impression::extract(hit.and_then(|h| h.impression_tag.as_deref())).into();
    row
}
