//! `tagsync columns --tags <file>` – show tag-file columns and tracker candidates.

use anyhow::Result;
use std::path::Path;
use tagsync_core::columns::{self, CLICK_TAG_KEYWORDS, DEFAULT_THRESHOLD, IMPRESSION_TAG_KEYWORDS};
use tagsync_core::config::{ColumnMatching, TagsyncConfig};
use tagsync_core::{loader, InputFile, SourceRole};

pub fn run_columns(cfg: &TagsyncConfig, path: &Path) -> Result<()> {
    let input = InputFile::read(path)?;
    let table = loader::load_table(&input, SourceRole::Tags, cfg)?;

    println!("{:<4} {}", "#", "COLUMN");
    for (i, name) in table.columns().iter().enumerate() {
        println!("{:<4} {}", i, name);
    }
    println!();

    for (label, keywords, fixed) in [
        ("click", CLICK_TAG_KEYWORDS, &cfg.tags.click_tag_column),
        ("impression", IMPRESSION_TAG_KEYWORDS, &cfg.tags.impression_tag_column),
    ] {
        match cfg.tags.column_matching {
            ColumnMatching::Exact => {
                let state = if table.column_index(fixed).is_some() {
                    "found"
                } else {
                    "MISSING"
                };
                println!("{label} tracker: '{fixed}' ({state})");
            }
            ColumnMatching::Fuzzy => {
                let found = columns::candidates(table.columns(), keywords, DEFAULT_THRESHOLD);
                match found.split_first() {
                    Some((chosen, rest)) => {
                        println!("{label} tracker: '{chosen}'");
                        for other in rest {
                            println!("  also matches: '{other}'");
                        }
                    }
                    None => println!("{label} tracker: none (no header contains {})", keywords.join(" + ")),
                }
            }
        }
    }
    Ok(())
}
