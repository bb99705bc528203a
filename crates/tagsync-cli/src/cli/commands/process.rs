//! `tagsync process --ads <file> --tags <file>` – run the pipeline and export.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tagsync_core::config::TagsyncConfig;
use tagsync_core::{export, pipeline, InputFile};

use crate::cli::OutputFormat;

pub fn run_process(
    cfg: &TagsyncConfig,
    ads: &Path,
    tags: &Path,
    out_dir: &Path,
    name: &str,
    format: OutputFormat,
) -> Result<()> {
    let ads = InputFile::read(ads)?;
    let tags = InputFile::read(tags)?;
    let out = pipeline::process_files(&ads, &tags, cfg)?;

    // Serialize everything before touching the output directory.
    let mut files: Vec<(PathBuf, Vec<u8>)> = Vec::new();
    if format.csv() {
        files.push((out_dir.join(format!("{name}.csv")), export::to_csv_bytes(&out.table)?));
    }
    if format.xlsx() {
        files.push((out_dir.join(format!("{name}.xlsx")), export::to_xlsx_bytes(&out.table)?));
    }

    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    for (path, bytes) in &files {
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        println!("Wrote {}", path.display());
    }
    println!(
        "{} rows ({} matched, {} unmatched)",
        out.stats.output_rows, out.stats.matched, out.stats.unmatched
    );
    Ok(())
}
