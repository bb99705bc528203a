//! `tagsync rewrite-url <url> --campaign <name>` – rewrite one click URL.

use tagsync_core::config::TagsyncConfig;
use tagsync_core::url_model;

pub fn run_rewrite_url(cfg: &TagsyncConfig, url: &str, campaign: &str, tracker: Option<&str>) {
    println!(
        "{}",
        url_model::rewrite_with(Some(url), tracker, campaign, &cfg.attribution)
    );
}
