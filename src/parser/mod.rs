use crate::error::{CoaError, CoaResult};
use crate::types::Record;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// author, affiliation, date
const RECORD_FIELDS: usize = 3;

/// Parse an ADS author affiliations CSV into records.
///
/// The file has no header row and exactly three columns per line:
/// author, affiliation and a `YYYY/MM/DD` date.
///
/// # Example
/// ```no_run
/// use ads2coa::parser::parse_records;
/// use std::path::Path;
///
/// let records = parse_records(Path::new("authorAffiliations.csv"))?;
/// println!("Authors: {}", records.len());
/// # Ok::<(), ads2coa::error::CoaError>(())
/// ```
pub fn parse_records(path: &Path) -> CoaResult<Vec<Record>> {
    if !path.is_file() {
        return Err(CoaError::MissingFile {
            artifact: "author affiliations CSV",
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    let records = parse_records_from_reader(file)?;
    debug!(path = %path.display(), count = records.len(), "parsed author records");
    Ok(records)
}

/// Parse records from any reader (same rules as [`parse_records`])
pub fn parse_records_from_reader<R: Read>(reader: R) -> CoaResult<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let line = idx + 1;
        let malformed = |reason: String| CoaError::MalformedRecord { line, reason };

        let row = row.map_err(|e| malformed(e.to_string()))?;
        if row.len() != RECORD_FIELDS {
            return Err(malformed(format!(
                "expected {} fields (author, affiliation, date), found {}",
                RECORD_FIELDS,
                row.len()
            )));
        }
        let record: Record = row.deserialize(None).map_err(|e| malformed(e.to_string()))?;

        if record.coa_date().is_none() {
            return Err(malformed(format!(
                "date '{}' is not in YYYY/MM/DD form",
                record.date
            )));
        }

        records.push(record);
    }

    Ok(records)
}
