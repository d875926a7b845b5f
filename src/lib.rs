//! ads2coa - NSF COA spreadsheet generator
//!
//! Merges an ADS author affiliations CSV into the NSF Collaborators and Other
//! Affiliations template, growing Table 4 to one row per author while keeping
//! the template's formatting and table definitions intact.
//!
//! # Example
//!
//! ```no_run
//! use ads2coa::excel::{CoaTemplate, TableExpander};
//! use ads2coa::parser::parse_records;
//! use ads2coa::writer::save_workbook;
//! use std::path::Path;
//!
//! let records = parse_records(Path::new("authorAffiliations.csv"))?;
//! let mut template = CoaTemplate::open(Path::new("coa_template.xlsx"))?;
//!
//! TableExpander::default().expand(&mut template, &records)?;
//! save_workbook(template.workbook(), Path::new("coa.xlsx"))?;
//! # Ok::<(), ads2coa::error::CoaError>(())
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::GenerateConfig;
pub use error::{CoaError, CoaResult};
pub use types::{CellRef, RangeRef, Record};
