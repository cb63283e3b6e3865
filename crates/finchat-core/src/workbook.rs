//! Workbook domain model and text flattening.
//!
//! An uploaded spreadsheet becomes a [`WorkbookData`]: an ordered list of
//! sheets, each with its column labels and row-major string cells. The
//! [`flatten`] function renders that into the deterministic text context
//! injected into prompts. Parsing files into `WorkbookData` is an
//! infrastructure concern; everything here is pure.

use std::fmt::Write as _;

/// One sheet of a workbook: name, ordered column labels, row-major cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetData {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A parsed workbook, with sheets in the order the file exposes them.
///
/// Sheet order is part of the flattening contract (it makes the output
/// deterministic) but carries no other meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookData {
    pub sheets: Vec<SheetData>,
}

/// How much of each sheet the flattened context carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenMode {
    /// Sheet name, column labels and row count only.
    Compact,
    /// Everything in `Compact`, plus the full stringified row contents.
    Verbose,
}

/// Header line opening every flattened context.
pub const CONTEXT_HEADER: &str = "Datos financieros disponibles:";

/// Flattens a workbook into the text context handed to the model.
///
/// For each sheet, in workbook order: the sheet name, the comma-joined
/// column labels in original order, and the row count. In verbose mode the
/// full row contents follow, one line per row with cells joined by `" | "`
/// in original column order.
pub fn flatten(workbook: &WorkbookData, mode: FlattenMode) -> String {
    let mut context = format!("{CONTEXT_HEADER}\n\n");

    for sheet in &workbook.sheets {
        let _ = writeln!(context, "Hoja: {}", sheet.name);
        let _ = writeln!(context, "Columnas: {}", sheet.columns.join(", "));
        let _ = writeln!(context, "Número de filas: {}", sheet.rows.len());

        if mode == FlattenMode::Verbose {
            context.push_str("Contenido:\n");
            for row in &sheet.rows {
                let _ = writeln!(context, "{}", row.join(" | "));
            }
        }

        context.push('\n');
    }

    context
}
