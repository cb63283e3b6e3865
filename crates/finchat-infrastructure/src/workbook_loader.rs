//! Spreadsheet file loading.
//!
//! Reads `.xlsx`/`.xls` workbooks into the domain [`WorkbookData`] model.
//! The first row of each sheet supplies the column labels, remaining rows
//! the data, every cell coerced to text. Unreadable files surface a
//! `FinchatError::Parse` so the caller can continue without context.

use calamine::{Data, Reader, open_workbook_auto};
use finchat_core::error::{FinchatError, Result};
use finchat_core::workbook::{SheetData, WorkbookData};
use std::path::Path;

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Loads a workbook file into [`WorkbookData`], preserving sheet order.
///
/// Sheets without a header row come back with no columns and no rows rather
/// than failing the whole file.
pub fn load_workbook(path: &Path) -> Result<WorkbookData> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        FinchatError::parse(format!("no se pudo leer el archivo '{}': {e}", path.display()))
    })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in sheet_names {
        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            FinchatError::parse(format!("no se pudo leer la hoja '{sheet_name}': {e}"))
        })?;

        let mut rows_iter = range.rows();
        let columns: Vec<String> = rows_iter
            .next()
            .map(|header| header.iter().map(cell_to_string).collect())
            .unwrap_or_default();

        let rows: Vec<Vec<String>> = rows_iter
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        tracing::debug!(sheet = %sheet_name, rows = rows.len(), "sheet loaded");
        sheets.push(SheetData {
            name: sheet_name,
            columns,
            rows,
        });
    }

    Ok(WorkbookData { sheets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_a_parse_failure() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_workbook(&temp_dir.path().join("no-existe.xlsx")).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_corrupt_file_is_a_parse_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roto.xlsx");
        std::fs::write(&path, b"esto no es un libro de excel").unwrap();

        let err = load_workbook(&path).unwrap_err();
        assert!(err.is_parse());
    }
}
