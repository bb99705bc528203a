//! Spreadsheet input (xlsx, xlsm, xls, ods) via calamine.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};

use crate::error::{PipelineError, Result};
use crate::table::{Table, Value};

use super::column_names;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read worksheet `sheet` with its header on the zero-based sheet row
/// `header_row` (absolute, i.e. row 11 in Excel is `10`).
pub(super) fn read_sheet(bytes: &[u8], sheet: &str, header_row: usize) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let names = workbook.sheet_names();
    if !names.iter().any(|n| n == sheet) {
        return Err(PipelineError::Unexpected(format!(
            "worksheet '{sheet}' not found; workbook has {names:?}"
        )));
    }
    let range = workbook.worksheet_range(sheet)?;

    // Ranges start at the first used cell, not at A1.
    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    let missing_header = || {
        PipelineError::Unexpected(format!(
            "worksheet '{sheet}' has no header on row {}",
            header_row + 1
        ))
    };
    if header_row < first_row {
        return Err(missing_header());
    }

    let mut rows = range.rows().skip(header_row - first_row);
    let header = rows.next().ok_or_else(missing_header)?;
    let columns = column_names(header.iter().map(|c| cell(c).to_key_string()));

    let rows = rows
        .map(|r| r.iter().map(cell).collect())
        .collect();
    Ok(Table::new(columns, rows))
}

fn cell(data: &Data) -> Value {
    match data {
        Data::Empty => Value::Null,
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::Text(s.clone()),
        Data::Int(i) => Value::Int(*i),
        Data::Float(f) => Value::Float(*f),
        Data::Bool(b) => Value::Bool(*b),
        // #N/A, #REF! and friends read as missing.
        Data::Error(_) => Value::Null,
        Data::DateTime(dt) if dt.is_duration() => match dt.as_duration() {
            Some(d) => Value::Text(duration_text(d.num_seconds())),
            None => Value::Float(dt.as_f64()),
        },
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(d) => Value::Text(d.format(DATETIME_FORMAT).to_string()),
            None => Value::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match data.as_datetime() {
            Some(d) => Value::Text(d.format(DATETIME_FORMAT).to_string()),
            None => Value::Text(s.clone()),
        },
        Data::DurationIso(s) => Value::Text(s.clone()),
    }
}

/// `H:MM:SS`, hours unbounded.
fn duration_text(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let secs = total_seconds.unsigned_abs();
    format!("{sign}{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}
