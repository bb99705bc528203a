//! `tagsync extract-impression <tag>` – print the quoted URL in a tag snippet.

use anyhow::Result;
use tagsync_core::impression;

pub fn run_extract_impression(tag: &str) -> Result<()> {
    match impression::extract(Some(tag)) {
        Some(url) => {
            println!("{url}");
            Ok(())
        }
        None => anyhow::bail!("no quoted URL found in tag"),
    }
}
