//! Required-column checks for both inputs.

use crate::columns::{self, CLICK_TAG_KEYWORDS, DEFAULT_THRESHOLD, IMPRESSION_TAG_KEYWORDS};
use crate::config::{AdsConfig, ColumnMatching, TagsConfig};
use crate::error::{PipelineError, Result, SourceRole};
use crate::table::Table;

use super::{AD_GROUP_NAME, AD_NAME, CAMPAIGN_NAME, PLACEMENT_NAME};

/// Column positions in the ad-export table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AdColumns {
    pub campaign: usize,
    pub ad_group: usize,
    pub ad_name: usize,
    pub click_url: usize,
}

impl AdColumns {
    pub fn resolve(table: &Table, cfg: &AdsConfig) -> Result<Self> {
        let role = SourceRole::Ads;
        Ok(Self {
            click_url: table.require(&cfg.click_url_column, role)?,
            campaign: table.require(CAMPAIGN_NAME, role)?,
            ad_group: table.require(AD_GROUP_NAME, role)?,
            ad_name: table.require(AD_NAME, role)?,
        })
    }

    pub fn keys(&self) -> [usize; 3] {
        [self.campaign, self.ad_group, self.ad_name]
    }
}

/// Column positions in the tag table, tracker columns included.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TagColumns {
    pub campaign: usize,
    pub placement: usize,
    pub ad_name: usize,
    pub click_tag: usize,
    pub impression_tag: usize,
}

impl TagColumns {
    pub fn resolve(table: &Table, cfg: &TagsConfig) -> Result<Self> {
        let role = SourceRole::Tags;
        let campaign = table.require(CAMPAIGN_NAME, role)?;
        let placement = table.require(PLACEMENT_NAME, role)?;
        let ad_name = table.require(AD_NAME, role)?;

        let (click_tag, impression_tag) = match cfg.column_matching {
            ColumnMatching::Exact => (
                table.require(&cfg.click_tag_column, role)?,
                table.require(&cfg.impression_tag_column, role)?,
            ),
            ColumnMatching::Fuzzy => (
                resolve_tracker(table, CLICK_TAG_KEYWORDS)?,
                resolve_tracker(table, IMPRESSION_TAG_KEYWORDS)?,
            ),
        };

        tracing::debug!(
            "tracker columns: click='{}' impression='{}'",
            table.columns()[click_tag],
            table.columns()[impression_tag]
        );

        Ok(Self {
            campaign,
            placement,
            ad_name,
            click_tag,
            impression_tag,
        })
    }

    pub fn keys(&self) -> [usize; 3] {
        [self.campaign, self.placement, self.ad_name]
    }
}

fn resolve_tracker(table: &Table, keywords: &[&str]) -> Result<usize> {
    columns::resolve_column(table.columns(), keywords, DEFAULT_THRESHOLD)
        .and_then(|name| table.column_index(name))
        .ok_or_else(|| {
            let wanted = format!("<header containing {}>", keywords.join(" + "));
            PipelineError::schema(SourceRole::Tags, &[wanted.as_str()], table.columns())
        })
}
