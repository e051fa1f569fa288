use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use crate::models::{Cell, ProteinTable};
use super::{ExportError, Exporter};

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
pub const CSV_MEDIA_TYPE: &str = "text/csv;charset=utf-8";

pub struct CsvExporter {
    delimiter: u8,
    with_bom: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            delimiter: b';',  // Semicolon for French/German Excel
            with_bom: true,   // UTF-8 BOM for Excel
        }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows are separated by a single `\n`, with no terminator after the last one.
    /// Cells holding the delimiter, a quote, `\r` or `\n` are quoted with inner quotes doubled.
    pub fn serialize(&self, rows: &[Vec<Cell>]) -> Result<Vec<u8>, csv::Error> {
        let mut out = Vec::new();
        if self.with_bom {
            out.extend_from_slice(&UTF8_BOM);
        }

        let mut builder = WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Necessary)
            .flexible(true);
        let mut writer = builder.from_writer(out);

        for row in rows {
            if is_blank(row) {
                // csv quotes an empty record as `""`
                let mut inner = writer.into_inner().map_err(|e| e.into_error())?;
                inner.push(b'\n');
                writer = builder.from_writer(inner);
            } else {
                writer.write_record(row.iter().map(|cell| cell.to_string()))?;
            }
        }

        let mut out = writer.into_inner().map_err(|e| e.into_error())?;
        if !rows.is_empty() {
            out.pop();
        }
        Ok(out)
    }
}

impl Exporter for CsvExporter {
    fn export(&self, table: &ProteinTable, path: &Path) -> Result<(), ExportError> {
        let bytes = self.serialize(&table.to_cells())?;
        debug!("Writing {} bytes of {} to {}", bytes.len(), CSV_MEDIA_TYPE, path.display());

        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(())
    }
}

fn is_blank(row: &[Cell]) -> bool {
    match row {
        [] => true,
        [cell] => cell.to_string().is_empty(),
        _ => false,
    }
}

/// Semicolon-separated, BOM-prefixed CSV of `rows`.
pub fn serialize_csv(rows: &[Vec<Cell>]) -> Result<Vec<u8>, csv::Error> {
    CsvExporter::default().serialize(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProteinRow, WEIGHT_HEADER};

    fn text_row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    fn body(bytes: &[u8]) -> &str {
        assert_eq!(&bytes[..3], &UTF8_BOM);
        std::str::from_utf8(&bytes[3..]).unwrap()
    }

    /// Splits on `;` and `\n` outside quotes, unescaping doubled quotes.
    fn parse(text: &str) -> Vec<Vec<String>> {
        let mut rows = vec![Vec::new()];
        let mut cell = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match (c, in_quotes) {
                ('"', true) if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                ('"', _) => in_quotes = !in_quotes,
                (';', false) => rows.last_mut().unwrap().push(std::mem::take(&mut cell)),
                ('\n', false) => {
                    rows.last_mut().unwrap().push(std::mem::take(&mut cell));
                    rows.push(Vec::new());
                }
                _ => cell.push(c),
            }
        }
        rows.last_mut().unwrap().push(cell);
        rows
    }

    #[test]
    fn test_plain_rows() {
        let rows = vec![text_row(&["a", "b"]), vec![Cell::Weight(60), Cell::from("48 – 60 g/jour")]];
        let bytes = serialize_csv(&rows).unwrap();
        assert_eq!(body(&bytes), "a;b\n60;48 – 60 g/jour");
    }

    #[test]
    fn test_escaping() {
        let bytes = serialize_csv(&[text_row(&["a;b\"c\nd", "ok"])]).unwrap();
        assert_eq!(body(&bytes), "\"a;b\"\"c\nd\";ok");
    }

    #[test]
    fn test_carriage_return_is_quoted() {
        let bytes = serialize_csv(&[text_row(&["x\ry"])]).unwrap();
        assert_eq!(body(&bytes), "\"x\ry\"");
    }

    #[test]
    fn test_quote_aware_parse_recovers_cells() {
        let original = vec![
            text_row(&["Poids (kg)", "a;b\"c\nd"]),
            text_row(&["70", "\"quoted\""]),
        ];
        let bytes = serialize_csv(&original).unwrap();
        let parsed = parse(body(&bytes));
        assert_eq!(parsed, vec![
            vec!["Poids (kg)".to_string(), "a;b\"c\nd".to_string()],
            vec!["70".to_string(), "\"quoted\"".to_string()],
        ]);
    }

    #[test]
    fn test_empty_cells_are_blank() {
        let rows = vec![vec![Cell::from("a"), Cell::Empty, Cell::from(None::<&str>)]];
        let bytes = serialize_csv(&rows).unwrap();
        assert_eq!(body(&bytes), "a;;");
    }

    #[test]
    fn test_no_rows_is_just_bom() {
        assert_eq!(serialize_csv(&[]).unwrap(), UTF8_BOM.to_vec());
    }

    #[test]
    fn test_single_empty_cell_is_a_blank_line() {
        let bytes = serialize_csv(&[vec![Cell::Empty]]).unwrap();
        assert_eq!(body(&bytes), "");

        let bytes = serialize_csv(&[vec![Cell::from("")], text_row(&["x"])]).unwrap();
        assert_eq!(body(&bytes), "\nx");
    }

    #[test]
    fn test_empty_row_between_rows() {
        let rows = vec![text_row(&["a"]), Vec::new(), text_row(&["b"])];
        let bytes = serialize_csv(&rows).unwrap();
        assert_eq!(body(&bytes), "a\n\nb");

        let rows = vec![text_row(&["a"]), vec![Cell::Empty], text_row(&["b"])];
        let bytes = serialize_csv(&rows).unwrap();
        assert_eq!(body(&bytes), "a\n\nb");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");

        let mut table = ProteinTable::new(vec!["Sédentaire".to_string()]);
        table.add_row(ProteinRow {
            weight: 60,
            ranges: vec!["48 – 60 g/jour".to_string()],
        });

        CsvExporter::new().export(&table, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(body(&bytes), format!("{};Sédentaire\n60;48 – 60 g/jour", WEIGHT_HEADER));
    }
}
