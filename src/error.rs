use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type CoaResult<T> = Result<T, CoaError>;

/// Which structural check on the vendor template failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeCheck {
    SheetName,
    SentinelPerson,
    DataTableRange,
    TrailingTable,
}

impl fmt::Display for ShapeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShapeCheck::SheetName => "first sheet name",
            ShapeCheck::SentinelPerson => "template person in first data row",
            ShapeCheck::DataTableRange => "table 4 location",
            ShapeCheck::TrailingTable => "table 5 definition",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum CoaError {
    #[error("Not an unmodified NSF COA template ({check}): expected {expected:?}, found {found:?}")]
    TemplateShape {
        check: ShapeCheck,
        expected: String,
        found: String,
    },

    #[error("Could not find {artifact} `{}`", .path.display())]
    MissingFile {
        artifact: &'static str,
        path: PathBuf,
    },

    #[error("Failed to download template from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Found {found} author records; the template needs at least {minimum}")]
    TooFewRecords { found: usize, minimum: usize },

    #[error("Found {found} author records; a worksheet fits at most {maximum}")]
    TooManyRecords { found: usize, maximum: usize },

    #[error("Refusing to overwrite input file `{}`", .path.display())]
    OutputCollision { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoaError {
    /// Build a template shape failure
    pub fn shape(check: ShapeCheck, expected: impl Into<String>, found: impl Into<String>) -> Self {
        CoaError::TemplateShape {
            check,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
