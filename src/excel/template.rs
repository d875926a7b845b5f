//! The vendor template: a mutable workbook plus a pristine reference copy

use super::cells::table_range;
use super::layout::TemplateLayout;
use crate::error::{CoaError, CoaResult, ShapeCheck};
use std::path::Path;
use tracing::{debug, info};
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// An NSF COA template loaded for editing.
///
/// `book` is the workbook that gets mutated and saved. `reference` is loaded
/// independently and never changed; table definitions are recovered from it
/// after the originals have been removed from `book`.
#[derive(Clone)]
pub struct CoaTemplate {
    book: Spreadsheet,
    reference: Spreadsheet,
}

impl CoaTemplate {
    /// Load the template at `path` twice: once to edit, once as reference
    pub fn open(path: &Path) -> CoaResult<Self> {
        if !path.is_file() {
            return Err(CoaError::MissingFile {
                artifact: "template",
                path: path.to_path_buf(),
            });
        }

        info!(path = %path.display(), "loading template");
        let book = read_workbook(path)?;
        let reference = read_workbook(path)?;
        Ok(Self { book, reference })
    }

    /// Wrap an in-memory workbook; the reference is a deep copy of it
    pub fn from_workbook(book: Spreadsheet) -> Self {
        let reference = book.clone();
        Self { book, reference }
    }

    pub fn workbook(&self) -> &Spreadsheet {
        &self.book
    }

    pub fn reference(&self) -> &Spreadsheet {
        &self.reference
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Spreadsheet, &Spreadsheet) {
        (&mut self.book, &self.reference)
    }

    pub fn into_workbook(self) -> Spreadsheet {
        self.book
    }

    /// Confirm the workbook is the unmodified vendor template.
    ///
    /// Checks, in order: the first sheet's name, the placeholder person in
    /// the first Table 4 row, the `ref` of the Table 4 table part, and the
    /// presence of the Table 5 table part.
    pub fn validate(&self, layout: &TemplateLayout) -> CoaResult<()> {
        let sheet = template_sheet(&self.book, layout)?;

        let sentinel = sheet.get_value(layout.sentinel_cell().as_tuple());
        if sentinel != layout.sentinel_person {
            return Err(CoaError::shape(
                ShapeCheck::SentinelPerson,
                layout.sentinel_person,
                sentinel,
            ));
        }

        let expected = layout.data_table_ref.to_string();
        match table_range(sheet, layout.data_table) {
            Some(range) if range == layout.data_table_ref => {}
            Some(range) => {
                return Err(CoaError::shape(
                    ShapeCheck::DataTableRange,
                    expected,
                    range.to_string(),
                ))
            }
            None => {
                return Err(CoaError::shape(
                    ShapeCheck::DataTableRange,
                    expected,
                    format!("no table named {}", layout.data_table),
                ))
            }
        }

        if table_range(sheet, layout.trailing_table).is_none() {
            return Err(CoaError::shape(
                ShapeCheck::TrailingTable,
                layout.trailing_table,
                format!("no table named {}", layout.trailing_table),
            ));
        }

        debug!("template shape checks passed");
        Ok(())
    }
}

/// The first worksheet, provided it carries the template's sheet name
pub(crate) fn template_sheet<'a>(
    book: &'a Spreadsheet,
    layout: &TemplateLayout,
) -> CoaResult<&'a Worksheet> {
    let sheet = book
        .get_sheet(&0)
        .ok_or_else(|| CoaError::shape(ShapeCheck::SheetName, layout.sheet_name, ""))?;

    if sheet.get_name() != layout.sheet_name {
        return Err(CoaError::shape(
            ShapeCheck::SheetName,
            layout.sheet_name,
            sheet.get_name(),
        ));
    }
    Ok(sheet)
}

fn read_workbook(path: &Path) -> CoaResult<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|e| CoaError::Xlsx(format!("Failed to open Excel file {}: {}", path.display(), e)))
}
