//! Input loading: CSV or spreadsheet blobs into a [`Table`].
//!
//! The file extension picks the parser; the source role picks the worksheet
//! and header row (tag exports carry a ten-row preamble above their header).

mod csv_source;
mod sheet;

use std::path::Path;

use anyhow::Context;

use crate::config::TagsyncConfig;
use crate::error::{PipelineError, Result, SourceRole};
use crate::table::Table;

/// A named input blob, as handed over by an upload or read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its file name.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    /// Lowercased extension without the dot; empty if there is none.
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Spreadsheet,
}

impl InputFormat {
    pub fn detect(input: &InputFile, role: SourceRole) -> Result<Self> {
        match input.extension().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(InputFormat::Spreadsheet),
            other => Err(PipelineError::Format {
                role,
                extension: if other.is_empty() {
                    "<none>".to_string()
                } else {
                    format!(".{other}")
                },
            }),
        }
    }
}

/// Load `input` using the sheet name and header row configured for `role`.
pub fn load_table(input: &InputFile, role: SourceRole, cfg: &TagsyncConfig) -> Result<Table> {
    let (sheet, header_row) = match role {
        SourceRole::Ads => (cfg.ads.sheet.as_str(), cfg.ads.header_row),
        SourceRole::Tags => (cfg.tags.sheet.as_str(), cfg.tags.header_row),
    };
    load_with(input, role, sheet, header_row)
}

/// Load `input` with an explicit worksheet (ignored for CSV) and zero-based
/// header row. Column names come back trimmed.
pub fn load_with(input: &InputFile, role: SourceRole, sheet: &str, header_row: usize) -> Result<Table> {
    let format = InputFormat::detect(input, role)?;
    let mut table = match format {
        InputFormat::Csv => csv_source::read_csv(&input.bytes, header_row),
        InputFormat::Spreadsheet => sheet::read_sheet(&input.bytes, sheet, header_row),
    }
    .map_err(|e| match e {
        PipelineError::Unexpected(msg) => {
            PipelineError::Unexpected(format!("{role} file '{}': {msg}", input.name))
        }
        other => other,
    })?;
    table.trim_column_names();

    tracing::debug!(
        "loaded {} file '{}' ({:?}): {} rows, columns {:?}",
        role,
        input.name,
        format,
        table.len(),
        table.columns()
    );
    Ok(table)
}

/// Header cells become column names; blank ones get a positional name.
fn column_names<I, S>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let name = c.as_ref().trim();
            if name.is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            }
        })
        .collect()
}
