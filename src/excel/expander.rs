//! Table 4 expansion: one template row per author record

use super::cells::{clear_values, copy_row, table_range, write_text};
use super::layout::TemplateLayout;
use super::template::{template_sheet, CoaTemplate};
use crate::error::{CoaError, CoaResult, ShapeCheck};
use crate::types::{CellRef, RangeRef, Record};
use tracing::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// Grows Table 4 of a COA template to hold exactly one row per record
#[derive(Debug, Clone, Default)]
pub struct TableExpander {
    layout: TemplateLayout,
}

impl TableExpander {
    /// Data rows that must be inserted for `record_count` records.
    ///
    /// Fewer records than the template's own rows are rejected rather than
    /// deleting template rows, as are more than the worksheet can hold.
    pub fn rows_to_add(&self, record_count: usize) -> CoaResult<u32> {
        let existing = self.layout.existing_rows;
        if record_count < existing as usize {
            return Err(CoaError::TooFewRecords {
                found: record_count,
                minimum: existing as usize,
            });
        }
        let maximum = self.layout.max_records();
        if record_count > maximum {
            return Err(CoaError::TooManyRecords {
                found: record_count,
                maximum,
            });
        }
        // bounded by max_records, which fits in u32
        Ok(record_count as u32 - existing)
    }

    /// Merge `records` into `template`.
    ///
    /// Every check runs before the first edit: on error the template is left
    /// exactly as it was.
    pub fn expand(&self, template: &mut CoaTemplate, records: &[Record]) -> CoaResult<()> {
        template.validate(&self.layout)?;
        let to_add = self.rows_to_add(records.len())?;
        let dates = coa_dates(records)?;

        let layout = &self.layout;
        let (book, reference) = template.parts_mut();
        let reference_sheet = template_sheet(reference, layout)?;
        let sheet = book
            .get_sheet_mut(&0)
            .ok_or_else(|| CoaError::shape(ShapeCheck::SheetName, layout.sheet_name, ""))?;

        debug!(records = records.len(), to_add, "expanding table 4");
        self.make_room(sheet, to_add);
        self.write_records(sheet, records, &dates);
        self.relocate_tables(sheet, reference_sheet, records.len() as u32, to_add)?;
        Ok(())
    }

    fn columns(&self) -> (u32, u32) {
        (self.layout.first_col, self.layout.last_col)
    }

    /// Clear the placeholder rows, move the closing row and insert styled rows
    fn make_room(&self, sheet: &mut Worksheet, to_add: u32) {
        let layout = &self.layout;
        let cols = self.columns();

        clear_values(sheet, layout.first_data_row, layout.cleared_rows, cols);

        let closing = layout.closing_row();
        let closing_dst = closing + to_add + layout.existing_rows + 1;
        debug!(from = closing, to = closing_dst, "copying closing row");
        copy_row(sheet, closing, closing_dst, cols);

        if to_add == 0 {
            return;
        }

        let insert_at = layout.insert_at();
        debug!(at = insert_at, count = to_add, "inserting rows");
        sheet.insert_new_row(&insert_at, &to_add);

        for offset in 0..to_add {
            copy_row(sheet, layout.first_data_row, insert_at + offset, cols);
        }
    }

    fn write_records(&self, sheet: &mut Worksheet, records: &[Record], dates: &[String]) {
        let layout = &self.layout;
        let first = layout.first_col;

        for (idx, (record, date)) in records.iter().zip(dates).enumerate() {
            let row = layout.first_data_row + idx as u32;
            let values = [
                layout.row_marker,
                record.author.as_str(),
                record.affiliation.as_str(),
                "",
                date.as_str(),
            ];
            for (col_offset, value) in values.iter().enumerate() {
                write_text(sheet, CellRef::new(first + col_offset as u32, row), value);
            }
        }
    }

    /// Re-register the Table 5 and Table 4 table parts with their new bounds.
    ///
    /// Row insertion does not move table parts, so both are rebuilt from the
    /// reference copy of the template.
    fn relocate_tables(
        &self,
        sheet: &mut Worksheet,
        reference: &Worksheet,
        record_count: u32,
        to_add: u32,
    ) -> CoaResult<()> {
        let layout = &self.layout;

        let trailing = table_range(reference, layout.trailing_table).ok_or_else(|| {
            CoaError::shape(
                ShapeCheck::TrailingTable,
                layout.trailing_table,
                format!("no table named {}", layout.trailing_table),
            )
        })?;
        replace_table(sheet, reference, layout.trailing_table, trailing.shifted_rows(to_add))?;

        replace_table(
            sheet,
            reference,
            layout.data_table,
            layout.data_table_ref_for(record_count),
        )
    }
}

/// Reformatted dates for every record, or the first malformed one
fn coa_dates(records: &[Record]) -> CoaResult<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            record.coa_date().ok_or_else(|| CoaError::MalformedRecord {
                line: idx + 1,
                reason: format!("date '{}' is not in YYYY/MM/DD form", record.date),
            })
        })
        .collect()
}

/// Drop table `name` from `sheet` and add the reference definition back at `area`
fn replace_table(
    sheet: &mut Worksheet,
    reference: &Worksheet,
    name: &str,
    area: RangeRef,
) -> CoaResult<()> {
    let mut table = reference
        .get_tables()
        .iter()
        .find(|t| t.get_name() == name)
        .cloned()
        .ok_or_else(|| CoaError::Xlsx(format!("Reference template has no table {}", name)))?;

    sheet.get_tables_mut().retain(|t| t.get_name() != name);

    let start = area.start.to_string();
    let end = area.end.to_string();
    table.set_area((start.as_str(), end.as_str()));
    debug!(table = name, area = %area, "re-adding table");
    sheet.add_table(table);
    Ok(())
}

/// Validate `template`, merge `records` and hand back the edited workbook
pub fn expand(mut template: CoaTemplate, records: &[Record]) -> CoaResult<Spreadsheet> {
    TableExpander::default().expand(&mut template, records)?;
    Ok(template.into_workbook())
}
