//! The tabular source adapter: one worksheet as a dense grid of optional
//! string cells, loaded from and saved to `.xlsx` files.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;
use tracing::{debug, info};

use crate::error::{Result, SheetError};
use crate::style::SaveOptions;

/// An ordered, mutable grid of optional string cells.
///
/// Rows and columns are zero-based; one-based row numbers appear only in
/// logs and operator-facing diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    rows: Vec<Vec<Option<String>>>,
}

impl Sheet {
    /// Loads the first worksheet of an `.xlsx` file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(SheetError::NoWorksheet)?;
        let range = workbook.worksheet_range(&name)?;
        let start = range.start().unwrap_or((0, 0));

        let mut sheet = Self::default();
        for (row, col, value) in range.used_cells() {
            let Some(text) = convert_value(value) else {
                continue;
            };
            // used_cells() coordinates are relative to range.start().
            sheet.set(start.0 as usize + row, start.1 as usize + col, text);
        }
        info!(path = %path.display(), rows = sheet.row_count(), "opened sheet");
        Ok(sheet)
    }

    /// Builds a sheet from in-memory rows. Cells past the end of a row are
    /// empty.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Writes a cell, growing the grid as needed.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
        }
        cells[col] = Some(value.into());
    }

    /// Saves the grid to an `.xlsx` file, applying the column styles and
    /// widths in `options` to every populated cell of the styled columns.
    pub fn save(&self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
        let path = path.as_ref();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, width) in &options.column_widths {
            worksheet.set_column_width(*col as u16, *width)?;
        }
        let formats = options.column_formats();
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(text) = cell else { continue };
                match formats.get(&col) {
                    Some(format) => {
                        worksheet.write_string_with_format(
                            row as u32,
                            col as u16,
                            text.as_str(),
                            format,
                        )?;
                    }
                    None => {
                        worksheet.write_string(row as u32, col as u16, text.as_str())?;
                    }
                }
            }
        }
        workbook.save(path)?;
        debug!(path = %path.display(), rows = self.row_count(), "saved sheet");
        Ok(())
    }
}

/// Renders a cell to text. Numeric cells must not grow a spurious `.0`:
/// identifier and id columns are frequently exported as numbers.
fn convert_value(value: &Data) -> Option<String> {
    match value {
        Data::Empty | Data::Error(_) => None,
        Data::String(v) => Some(v.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(render_float(*v)),
        Data::Bool(v) => Some(v.to_string()),
        Data::DateTime(v) => Some(render_float(v.as_f64())),
        Data::DateTimeIso(v) | Data::DurationIso(v) => Some(v.clone()),
    }
}

fn render_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
