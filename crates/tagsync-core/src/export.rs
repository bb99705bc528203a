//! Output serialization: CSV text and XLSX workbook from the same table.

use rust_xlsxwriter::Workbook;

use crate::error::{PipelineError, Result};
use crate::table::{Table, Value};

/// Worksheet name of the XLSX export.
pub const OUTPUT_SHEET: &str = "Updated Ads";

/// Header line then one record per row; nulls are empty fields.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(Value::to_key_string))?;
    }
    writer
        .into_inner()
        .map_err(|e| PipelineError::Unexpected(format!("csv export: {}", e.error())))
}

/// Single-sheet workbook: bold-free header row, then data. Numbers and
/// booleans keep their cell types; nulls leave the cell blank.
pub fn to_xlsx_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(OUTPUT_SHEET)?;

    for (c, name) in table.columns().iter().enumerate() {
        sheet.write_string(0, col_num(c)?, name)?;
    }
    for (r, row) in table.rows().iter().enumerate() {
        let r = u32::try_from(r + 1)
            .map_err(|_| PipelineError::Unexpected(format!("xlsx export: too many rows ({})", r + 1)))?;
        for (c, value) in row.iter().enumerate() {
            let c = col_num(c)?;
            match value {
                Value::Null => {}
                Value::Text(s) => {
                    sheet.write_string(r, c, s)?;
                }
                Value::Int(i) => {
                    sheet.write_number(r, c, *i as f64)?;
                }
                Value::Float(x) => {
                    sheet.write_number(r, c, *x)?;
                }
                Value::Bool(b) => {
                    sheet.write_boolean(r, c, *b)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn col_num(c: usize) -> Result<u16> {
    u16::try_from(c).map_err(|_| PipelineError::Unexpected(format!("xlsx export: too many columns ({})", c + 1)))
}
