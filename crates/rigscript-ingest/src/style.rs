//! Column styling hints applied when a sheet is saved.

use std::collections::BTreeMap;

use rust_xlsxwriter::{Color, Format, FormatAlign};

/// Font and alignment hints for one column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub font_name: Option<String>,
    pub font_size: Option<f64>,
    pub red_text: bool,
    pub align_left: bool,
}

impl CellStyle {
    fn to_format(&self) -> Format {
        let mut format = Format::new();
        if let Some(name) = &self.font_name {
            format = format.set_font_name(name);
        }
        if let Some(size) = self.font_size {
            format = format.set_font_size(size);
        }
        if self.red_text {
            format = format.set_font_color(Color::Red);
        }
        if self.align_left {
            format = format.set_align(FormatAlign::Left);
        }
        format
    }
}

/// Styling applied on save: per-column cell formats and per-column widths.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    pub column_styles: Vec<(usize, CellStyle)>,
    pub column_widths: Vec<(usize, f64)>,
}

impl SaveOptions {
    pub(crate) fn column_formats(&self) -> BTreeMap<usize, Format> {
        self.column_styles
            .iter()
            .map(|(col, style)| (*col, style.to_format()))
            .collect()
    }
}
