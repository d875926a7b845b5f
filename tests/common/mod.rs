//! Shared fixtures: a miniature NSF COA template and author CSVs

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use umya_spreadsheet::structs::{Table, TableColumn};
use umya_spreadsheet::{Spreadsheet, Worksheet};

pub const SHEET: &str = "NSF COA Template";
pub const DATA_FORMATS: [&str; 5] = ["@", "@", "@", "General", "mm/dd/yyyy"];

fn add_table(sheet: &mut Worksheet, name: &str, area: (&str, &str), headers: &[&str]) {
    let mut table = Table::new(name, area);
    for header in headers {
        table.add_column(TableColumn::new(header));
    }
    sheet.add_table(table);
}

/// Table 4 at A51:E56 with five placeholder people, Table 5 at A63:E73
pub fn template_book() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_mut(&0).unwrap();
    sheet.set_name(SHEET);

    sheet.get_cell_mut("A1").set_value_string("NSF COA Template");

    let headers = ["4", "Name:", "Organizational Affiliation", "Optional", "Last Active"];
    for (col, header) in headers.iter().enumerate() {
        sheet.get_cell_mut((col as u32 + 1, 51)).set_value_string(*header);
    }

    let people = [
        "Alphaman, Lin",
        "Betaman, Jun",
        "Gammaman, Kai",
        "Deltaman, Rae",
        "Epsilonman, Sol",
    ];
    for (idx, person) in people.iter().enumerate() {
        let row = 52 + idx as u32;
        let values = ["A:", *person, "Placeholder University", "", "01/01/2020"];
        for (col, value) in values.iter().enumerate() {
            let cell = sheet.get_cell_mut((col as u32 + 1, row));
            cell.set_value_string(*value);
            cell.get_style_mut()
                .get_number_format_mut()
                .set_format_code(DATA_FORMATS[col]);
        }
    }

    let table5 = ["5", "Name:", "Affiliation", "Optional", "Last Active"];
    for (col, header) in table5.iter().enumerate() {
        sheet.get_cell_mut((col as u32 + 1, 63)).set_value_string(*header);
    }

    add_table(sheet, "TableD", ("A51", "E56"), &headers);
    add_table(sheet, "TableD5", ("A63", "E73"), &table5);
    book
}

pub fn write_template(path: &Path) {
    umya_spreadsheet::writer::xlsx::write(&template_book(), path).unwrap();
}

/// `count` author lines in ADS export form
pub fn authors_csv(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "\"Author{i}, First\",\"Dept. {i}, University {i}\",2021/{:02}/{:02}\n",
                i % 12 + 1,
                i % 28 + 1
            )
        })
        .collect()
}

pub fn write_authors(path: &Path, count: usize) {
    fs::write(path, authors_csv(count)).unwrap();
}

/// Template and CSV under their default names inside `dir`
pub fn workspace(dir: &Path, authors: usize) -> (PathBuf, PathBuf) {
    let template = dir.join("coa_template.xlsx");
    let csv = dir.join("authorAffiliations.csv");
    write_template(&template);
    write_authors(&csv, authors);
    (template, csv)
}
