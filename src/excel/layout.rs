//! Fixed geometry of the NSF COA vendor template

use crate::types::{CellRef, RangeRef};

/// Published location of the unmodified NSF COA template
pub const NSF_TEMPLATE_URL: &str = "https://www.nsf.gov/bfa/dias/policy/coa/coa_template.xlsx";

/// Rows available on an xlsx worksheet
pub const MAX_WORKSHEET_ROWS: u32 = 1_048_576;

/// Everything the expander needs to know about the template's Table 4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    /// Name the first worksheet must carry
    pub sheet_name: &'static str,
    /// Placeholder person found in column B of the first data row
    pub sentinel_person: &'static str,
    /// Column holding the sentinel (1-based)
    pub sentinel_col: u32,
    /// First data row of Table 4 (1-based, the row under the header)
    pub first_data_row: u32,
    /// Data rows shipped in the template
    pub existing_rows: u32,
    /// Data rows whose values are cleared before writing
    pub cleared_rows: u32,
    pub first_col: u32,
    pub last_col: u32,
    /// Table part covering Table 4 (header included)
    pub data_table: &'static str,
    pub data_table_ref: RangeRef,
    /// Table part for Table 5, further down the sheet
    pub trailing_table: &'static str,
    /// Literal written to column A of every author row
    pub row_marker: &'static str,
}

impl TemplateLayout {
    pub const fn nsf_coa() -> Self {
        Self {
            sheet_name: "NSF COA Template",
            sentinel_person: "Alphaman, Lin",
            sentinel_col: 2,
            first_data_row: 52,
            existing_rows: 5,
            cleared_rows: 2,
            first_col: 1,
            last_col: 5,
            data_table: "TableD",
            data_table_ref: RangeRef::new(CellRef::new(1, 51), CellRef::new(5, 56)),
            trailing_table: "TableD5",
            row_marker: "A:",
        }
    }

    pub fn sentinel_cell(&self) -> CellRef {
        CellRef::new(self.sentinel_col, self.first_data_row)
    }

    /// Row right after the last template data row
    pub fn closing_row(&self) -> u32 {
        self.first_data_row + self.existing_rows
    }

    /// Where new rows are inserted: below the cleared rows
    pub fn insert_at(&self) -> u32 {
        self.first_data_row + self.cleared_rows
    }

    /// Most records Table 4 can hold before running off the worksheet
    pub fn max_records(&self) -> usize {
        (MAX_WORKSHEET_ROWS - self.first_data_row + 1) as usize
    }

    /// Table 4 range once it holds `record_count` data rows
    pub fn data_table_ref_for(&self, record_count: u32) -> RangeRef {
        let start = self.data_table_ref.start;
        RangeRef::new(
            start,
            CellRef::new(self.data_table_ref.end.col, start.row + record_count),
        )
    }
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self::nsf_coa()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nsf_layout_geometry() {
        let layout = TemplateLayout::nsf_coa();
        assert_eq!(layout.sentinel_cell().to_string(), "B52");
        assert_eq!(layout.data_table_ref.to_string(), "A51:E56");
        assert_eq!(layout.closing_row(), 57);
        assert_eq!(layout.insert_at(), 54);
        assert_eq!(layout.max_records(), 1_048_525);
    }

    #[test]
    fn test_data_table_ref_for_record_count() {
        let layout = TemplateLayout::nsf_coa();
        assert_eq!(layout.data_table_ref_for(5), layout.data_table_ref);
        assert_eq!(layout.data_table_ref_for(8).to_string(), "A51:E59");
    }
}
