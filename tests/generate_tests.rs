//! End-to-end tests: template + CSV on disk -> generated COA workbook

mod common;

use ads2coa::cli::generate;
use ads2coa::error::{CoaError, ShapeCheck};
use ads2coa::excel::{table_range, CoaTemplate, TableExpander};
use ads2coa::parser::parse_records;
use ads2coa::GenerateConfig;
use calamine::{open_workbook, Data, Reader, Xlsx};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn config_in(dir: &Path) -> GenerateConfig {
    GenerateConfig {
        dirname: dir.to_path_buf(),
        ..Default::default()
    }
}

fn read_back(path: &Path) -> umya_spreadsheet::Spreadsheet {
    umya_spreadsheet::reader::xlsx::read(path).unwrap()
}

#[test]
fn test_generate_eight_authors() {
    let dir = TempDir::new().unwrap();
    common::workspace(dir.path(), 8);

    let output = generate(config_in(dir.path())).unwrap();
    assert_eq!(output, dir.path().join("coa.xlsx"));

    let book = read_back(&output);
    let sheet = book.get_sheet(&0).unwrap();
    assert_eq!(sheet.get_name(), common::SHEET);
    assert_eq!(table_range(sheet, "TableD").unwrap().to_string(), "A51:E59");
    assert_eq!(table_range(sheet, "TableD5").unwrap().to_string(), "A66:E76");

    assert_eq!(sheet.get_value("A52"), "A:");
    assert_eq!(sheet.get_value("B52"), "Author0, First");
    assert_eq!(sheet.get_value("C52"), "Dept. 0, University 0");
    assert_eq!(sheet.get_value("E52"), "01/01/2021");
    assert_eq!(sheet.get_value("B59"), "Author7, First");
    assert_eq!(sheet.get_value("E59"), "08/08/2021");
}

#[test]
fn test_generated_rows_carry_template_formats() {
    let dir = TempDir::new().unwrap();
    common::workspace(dir.path(), 9);

    let output = generate(config_in(dir.path())).unwrap();
    let book = read_back(&output);
    let sheet = book.get_sheet(&0).unwrap();

    for row in 52u32..=60 {
        for (idx, expected) in common::DATA_FORMATS.iter().enumerate() {
            let code = sheet
                .get_cell((idx as u32 + 1, row))
                .and_then(|c| c.get_style().get_number_format())
                .map(|n| n.get_format_code().to_string());
            assert_eq!(code.as_deref(), Some(*expected), "row {row} col {}", idx + 1);
        }
    }
}

#[test]
fn test_generate_values_readable_by_calamine() {
    let dir = TempDir::new().unwrap();
    common::workspace(dir.path(), 6);

    let output = generate(config_in(dir.path())).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let range = workbook.worksheet_range(common::SHEET).unwrap();

    // calamine positions are 0-based (row, col)
    for i in 0..6u32 {
        let row = 51 + i;
        assert_eq!(
            range.get_value((row, 1)),
            Some(&Data::String(format!("Author{i}, First")))
        );
    }
    assert_eq!(
        range.get_value((51, 4)),
        Some(&Data::String("01/01/2021".to_string()))
    );
}

#[test]
fn test_generate_five_authors_keeps_table_size() {
    let dir = TempDir::new().unwrap();
    common::workspace(dir.path(), 5);

    let output = generate(config_in(dir.path())).unwrap();
    let book = read_back(&output);
    let sheet = book.get_sheet(&0).unwrap();

    assert_eq!(table_range(sheet, "TableD").unwrap().to_string(), "A51:E56");
    assert_eq!(table_range(sheet, "TableD5").unwrap().to_string(), "A63:E73");
    assert_eq!(sheet.get_value("B56"), "Author4, First");
}

#[test]
fn test_inputs_are_not_modified() {
    let dir = TempDir::new().unwrap();
    let (template, csv) = common::workspace(dir.path(), 7);
    let template_bytes = fs::read(&template).unwrap();
    let csv_bytes = fs::read(&csv).unwrap();

    generate(config_in(dir.path())).unwrap();

    assert_eq!(fs::read(&template).unwrap(), template_bytes);
    assert_eq!(fs::read(&csv).unwrap(), csv_bytes);
}

#[test]
fn test_generate_twice_on_output_is_refused() {
    let dir = TempDir::new().unwrap();
    common::workspace(dir.path(), 7);
    generate(config_in(dir.path())).unwrap();

    let config = GenerateConfig {
        template_filename: PathBuf::from("coa.xlsx"),
        out_filename: PathBuf::from("coa_again.xlsx"),
        ..config_in(dir.path())
    };
    let err = generate(config).unwrap_err();

    assert!(matches!(
        err,
        CoaError::TemplateShape {
            check: ShapeCheck::SentinelPerson,
            ..
        }
    ));
    assert!(!dir.path().join("coa_again.xlsx").exists());
}

#[test]
fn test_edited_template_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("coa_template.xlsx");
    let mut book = common::template_book();
    book.get_sheet_mut(&0)
        .unwrap()
        .get_cell_mut("B52")
        .set_value_string("Someone, Else");
    umya_spreadsheet::writer::xlsx::write(&book, &template).unwrap();
    common::write_authors(&dir.path().join("authorAffiliations.csv"), 8);

    let err = generate(config_in(dir.path())).unwrap_err();

    assert!(matches!(err, CoaError::TemplateShape { .. }));
    assert!(!dir.path().join("coa.xlsx").exists());
}

#[test]
fn test_too_few_authors_writes_nothing() {
    let dir = TempDir::new().unwrap();
    common::workspace(dir.path(), 3);

    let err = generate(config_in(dir.path())).unwrap_err();

    assert!(matches!(err, CoaError::TooFewRecords { found: 3, minimum: 5 }));
    assert!(!dir.path().join("coa.xlsx").exists());
}

#[test]
fn test_missing_csv_is_reported() {
    let dir = TempDir::new().unwrap();
    common::write_template(&dir.path().join("coa_template.xlsx"));

    let err = generate(config_in(dir.path())).unwrap_err();

    assert!(err.to_string().contains("author affiliations CSV"));
    assert!(!dir.path().join("coa.xlsx").exists());
}

#[test]
fn test_malformed_date_writes_nothing() {
    let dir = TempDir::new().unwrap();
    common::write_template(&dir.path().join("coa_template.xlsx"));
    let mut csv = common::authors_csv(6);
    csv.push_str("\"Late, Entry\",Somewhere,2021-01-01\n");
    fs::write(dir.path().join("authorAffiliations.csv"), csv).unwrap();

    let err = generate(config_in(dir.path())).unwrap_err();

    assert!(matches!(err, CoaError::MalformedRecord { line: 7, .. }));
    assert!(!dir.path().join("coa.xlsx").exists());
}

#[test]
fn test_reference_copy_survives_expansion() {
    let dir = TempDir::new().unwrap();
    let (template_path, csv) = common::workspace(dir.path(), 8);

    let records = parse_records(&csv).unwrap();
    let mut template = CoaTemplate::open(&template_path).unwrap();
    TableExpander::default()
        .expand(&mut template, &records)
        .unwrap();

    let reference = template.reference().get_sheet(&0).unwrap();
    assert_eq!(reference.get_value("B52"), "Alphaman, Lin");
    assert_eq!(table_range(reference, "TableD").unwrap().to_string(), "A51:E56");
    assert_eq!(table_range(reference, "TableD5").unwrap().to_string(), "A63:E73");
}
