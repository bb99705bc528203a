//! CSV input.

use csv::ReaderBuilder;

use crate::error::{PipelineError, Result};
use crate::table::{Table, Value};

use super::column_names;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse CSV text whose header is the record at `header_row` (zero-based).
/// Records above the header are discarded; rows may be ragged.
pub(super) fn read_csv(bytes: &[u8], header_row: usize) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut records = reader.records();

    for _ in 0..header_row {
        if records.next().transpose()?.is_none() {
            return Err(missing_header(header_row));
        }
    }
    let header = records
        .next()
        .transpose()?
        .ok_or_else(|| missing_header(header_row))?;
    let columns = column_names(header.iter());

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(cell).collect());
    }
    Ok(Table::new(columns, rows))
}

fn cell(field: &str) -> Value {
    if field.is_empty() {
        Value::Null
    } else {
        Value::Text(field.to_string())
    }
}

fn missing_header(header_row: usize) -> PipelineError {
    PipelineError::Unexpected(format!(
        "no header row: expected column names on line {}",
        header_row + 1
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_on_first_line() {
        let t = read_csv(b"Ad Name,Web URL\nA1,https://x.example/\nA2,\n", 0).unwrap();
        assert_eq!(t.columns(), &["Ad Name".to_string(), "Web URL".to_string()]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(1, "Web URL"), Some(&Value::Null));
    }

    #[test]
    fn header_after_preamble() {
        let mut text = String::new();
        for i in 0..10 {
            text.push_str(&format!("Preamble line {i},,\n"));
        }
        text.push_str("Campaign Name,Placement Name,Ad Name\nC,P,A\n");
        let t = read_csv(text.as_bytes(), 10).unwrap();
        assert_eq!(t.columns()[1], "Placement Name");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(0, "Ad Name"), Some(&Value::from("A")));
    }

    #[test]
    fn blank_lines_do_not_count_toward_header_offset() {
        let mut text = String::new();
        for i in 0..10 {
            text.push_str(&format!("Preamble line {i}\n"));
            if i % 2 == 0 {
                text.push('\n');
            }
        }
        text.push_str("Campaign Name,Placement Name,Ad Name\n\nC,P,A\n");
        let t = read_csv(text.as_bytes(), 10).unwrap();
        assert_eq!(t.columns()[0], "Campaign Name");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(0, "Placement Name"), Some(&Value::from("P")));
    }

    #[test]
    fn bom_is_ignored() {
        let t = read_csv(b"\xEF\xBB\xBFCampaign Name\nC\n", 0).unwrap();
        assert_eq!(t.columns(), &["Campaign Name".to_string()]);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let t = read_csv(b"a,b,c\n1\n1,2,3,4\n", 0).unwrap();
        assert_eq!(t.rows()[0], vec![Value::from("1"), Value::Null, Value::Null]);
        assert_eq!(t.rows()[1].len(), 3);
    }

    #[test]
    fn short_file_has_no_header() {
        let err = read_csv(b"a\nb\n", 10).unwrap_err();
        assert!(err.to_string().contains("line 11"), "{err}");
    }
}
