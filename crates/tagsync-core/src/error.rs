//! Pipeline error type.
//!
//! Every failure surfaced to a caller carries one of three kinds so the front
//! end can report "what went wrong" separately from "why".

use std::fmt;

use thiserror::Error;

/// Which input file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    /// The primary ad-export file.
    Ads,
    /// The tag/tracker file.
    Tags,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRole::Ads => write!(f, "ad export"),
            SourceRole::Tags => write!(f, "tag"),
        }
    }
}

/// Coarse classification of a [`PipelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Schema,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Format => write!(f, "format error"),
            ErrorKind::Schema => write!(f, "schema error"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file extension selects no known parser.
    #[error("unsupported {role} file format '{extension}'; expected .csv or a spreadsheet (.xlsx, .xlsm, .xls, .ods)")]
    Format { role: SourceRole, extension: String },

    /// A required column is missing or could not be resolved.
    #[error("expected column {} not found in the {table} file; available columns are: {actual:?}", quoted(.expected))]
    Schema {
        table: SourceRole,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Anything else: unreadable CSV, malformed workbook, missing sheet, export failure.
    #[error("{0}")]
    Unexpected(String),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Format { .. } => ErrorKind::Format,
            PipelineError::Schema { .. } => ErrorKind::Schema,
            PipelineError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub(crate) fn schema(table: SourceRole, expected: &[&str], actual: &[String]) -> Self {
        PipelineError::Schema {
            table,
            expected: expected.iter().map(|s| s.to_string()).collect(),
            actual: actual.to_vec(),
        }
    }
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(" or ")
}

impl From<csv::Error> for PipelineError {
    fn from(e: csv::Error) -> Self {
        PipelineError::Unexpected(format!("csv: {e}"))
    }
}

impl From<calamine::Error> for PipelineError {
    fn from(e: calamine::Error) -> Self {
        PipelineError::Unexpected(format!("spreadsheet: {e}"))
    }
}

impl From<rust_xlsxwriter::XlsxError> for PipelineError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        PipelineError::Unexpected(format!("xlsx export: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
