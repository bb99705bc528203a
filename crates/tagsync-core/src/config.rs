use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the tracker columns of the tag file are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMatching {
    /// Keyword containment ("click" + "tag", "impression" + "tag").
    #[default]
    Fuzzy,
    /// Fixed header names from `[tags]`.
    Exact,
}

/// Layout of the primary ad-export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdsConfig {
    /// Worksheet read from spreadsheet exports.
    pub sheet: String,
    /// Zero-based row holding the column headers.
    pub header_row: usize,
    /// Column whose URL gets rewritten.
    pub click_url_column: String,
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            sheet: "Ads".to_string(),
            header_row: 0,
            click_url_column: "Web URL".to_string(),
        }
    }
}

/// Layout of the tag/tracker file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    pub sheet: String,
    /// Zero-based header row; tag exports carry ten rows of preamble.
    pub header_row: usize,
    /// Click tracker header, used when `column_matching = "exact"`.
    pub click_tag_column: String,
    /// Impression tracker header, used when `column_matching = "exact"`.
    pub impression_tag_column: String,
    pub column_matching: ColumnMatching,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            sheet: "Tracking Ads".to_string(),
            header_row: 10,
            click_tag_column: "Click Tag".to_string(),
            impression_tag_column: "Impression Tag (image)".to_string(),
            column_matching: ColumnMatching::Fuzzy,
        }
    }
}

/// Fixed attribution values forced onto every click URL. The two campaign
/// parameters always carry the record's campaign name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    pub utm_source: String,
    pub utm_medium: String,
    pub tf_source: String,
    pub tf_medium: String,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            utm_source: "tiktok".to_string(),
            utm_medium: "paid".to_string(),
            tf_source: "tiktok".to_string(),
            tf_medium: "paid_social".to_string(),
        }
    }
}

impl AttributionConfig {
    /// The six parameters in the order they are applied.
    pub fn canonical_params<'a>(&'a self, campaign_name: &'a str) -> [(&'static str, &'a str); 6] {
        [
            ("utm_source", self.utm_source.as_str()),
            ("utm_medium", self.utm_medium.as_str()),
            ("utm_campaign", campaign_name),
            ("tf_source", self.tf_source.as_str()),
            ("tf_medium", self.tf_medium.as_str()),
            ("tf_campaign", campaign_name),
        ]
    }
}

/// Global configuration loaded from `~/.config/tagsync/config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsyncConfig {
    pub ads: AdsConfig,
    pub tags: TagsConfig,
    pub attribution: AttributionConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tagsync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TagsyncConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TagsyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing sections and keys fall
/// back to their defaults.
pub fn load_from(path: &Path) -> Result<TagsyncConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TagsyncConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = TagsyncConfig::default();
        assert_eq!(cfg.ads.sheet, "Ads");
        assert_eq!(cfg.ads.header_row, 0);
        assert_eq!(cfg.ads.click_url_column, "Web URL");
        assert_eq!(cfg.tags.sheet, "Tracking Ads");
        assert_eq!(cfg.tags.header_row, 10);
        assert_eq!(cfg.tags.column_matching, ColumnMatching::Fuzzy);
        assert_eq!(cfg.attribution.tf_medium, "paid_social");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = TagsyncConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: TagsyncConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            "[tags]\ncolumn_matching = \"exact\"\nclick_tag_column = \"Click Tracker\"\n\n[attribution]\nutm_source = \"snap\""
        )
        .unwrap();
        f.flush().unwrap();

        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.tags.column_matching, ColumnMatching::Exact);
        assert_eq!(cfg.tags.click_tag_column, "Click Tracker");
        assert_eq!(cfg.tags.header_row, 10);
        assert_eq!(cfg.attribution.utm_source, "snap");
        assert_eq!(cfg.attribution.utm_medium, "paid");
        assert_eq!(cfg.ads, AdsConfig::default());
    }

    #[test]
    fn canonical_param_order() {
        let cfg = AttributionConfig::default();
        let keys: Vec<&str> = cfg.canonical_params("C").iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["utm_source", "utm_medium", "utm_campaign", "tf_source", "tf_medium", "tf_campaign"]
        );
    }
}
