//! Row level helpers over umya worksheets

use crate::types::{CellRef, RangeRef};
use umya_spreadsheet::{Style, Worksheet};

/// Copy value and full style (font, alignment, border, fill, number format)
/// of every cell in `cols` on `src_row` to the same columns on `dst_row`.
///
/// Cells that do not exist in the source row are left untouched.
pub fn copy_row(sheet: &mut Worksheet, src_row: u32, dst_row: u32, cols: (u32, u32)) {
    for col in cols.0..=cols.1 {
        let source: Option<(String, Style)> = sheet
            .get_cell((col, src_row))
            .map(|cell| (cell.get_value().to_string(), cell.get_style().clone()));

        if let Some((value, style)) = source {
            let dst = sheet.get_cell_mut((col, dst_row));
            dst.set_value(value);
            dst.set_style(style);
        }
    }
}

/// Blank the values of `rows` starting at `first_row`, keeping their styles
pub fn clear_values(sheet: &mut Worksheet, first_row: u32, rows: u32, cols: (u32, u32)) {
    for row in first_row..first_row + rows {
        for col in cols.0..=cols.1 {
            if sheet.get_cell((col, row)).is_some() {
                sheet.get_cell_mut((col, row)).set_value_string("");
            }
        }
    }
}

/// Write a text value without numeric or boolean guessing
pub fn write_text(sheet: &mut Worksheet, cell: CellRef, value: &str) {
    sheet.get_cell_mut(cell.as_tuple()).set_value_string(value);
}

/// Read a table part's `ref` as a [`RangeRef`]
pub fn table_range(sheet: &Worksheet, name: &str) -> Option<RangeRef> {
    let table = sheet.get_tables().iter().find(|t| t.get_name() == name)?;
    let (start, end) = table.get_area();
    let start: CellRef = start.get_coordinate().parse().ok()?;
    let end: CellRef = end.get_coordinate().parse().ok()?;
    Some(RangeRef::new(start, end))
}
