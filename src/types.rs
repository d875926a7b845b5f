use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

//==============================================================================
// Author Records
//==============================================================================

/// One line of the ADS author affiliations CSV
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub author: String,
    pub affiliation: String,
    /// Last active date as `YYYY/MM/DD`
    pub date: String,
}

impl Record {
    pub fn new(
        author: impl Into<String>,
        affiliation: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            affiliation: affiliation.into(),
            date: date.into(),
        }
    }

    /// The date in the `MM/DD/YYYY` form the COA template expects
    pub fn coa_date(&self) -> Option<String> {
        reformat_date(&self.date)
    }
}

/// Reorder `YYYY/MM/DD` into `MM/DD/YYYY`.
///
/// Purely syntactic: the three components are not checked against a calendar.
/// Returns `None` unless the input splits into exactly three parts on `/`.
pub fn reformat_date(date: &str) -> Option<String> {
    let mut parts = date.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => Some(format!("{}/{}/{}", month, day, year)),
        _ => None,
    }
}

//==============================================================================
// Cell and Range References
//==============================================================================

/// A single A1-style cell reference (1-based column and row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellRef {
    pub col: u32,
    pub row: u32,
}

impl CellRef {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Convert a 1-based column index to letters (1 -> A, 27 -> AA)
    pub fn column_letters(mut col: u32) -> String {
        let mut letters = Vec::new();
        while col > 0 {
            let rem = (col - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            col = (col - 1) / 26;
        }
        letters.iter().rev().collect()
    }

    pub fn shifted_rows(self, rows: u32) -> Self {
        Self::new(self.col, self.row + rows)
    }

    pub fn as_tuple(self) -> (u32, u32) {
        (self.col, self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_letters(self.col), self.row)
    }
}

impl FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|c| *c != '$').collect();
        let split = cleaned
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| format!("Cell reference '{}' has no row", s))?;
        let (letters, digits) = cleaned.split_at(split);

        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Cell reference '{}' has no column", s));
        }

        let col = letters
            .chars()
            .fold(0u32, |acc, c| acc * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1));
        let row: u32 = digits
            .parse()
            .map_err(|_| format!("Cell reference '{}' has an invalid row", s))?;
        if row == 0 {
            return Err(format!("Cell reference '{}' has row 0", s));
        }

        Ok(Self::new(col, row))
    }
}

/// A rectangular `A1:E56` range, the `ref` of a table part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRef {
    pub start: CellRef,
    pub end: CellRef,
}

impl RangeRef {
    pub const fn new(start: CellRef, end: CellRef) -> Self {
        Self { start, end }
    }

    /// Move the whole range down by `rows`
    pub fn shifted_rows(self, rows: u32) -> Self {
        Self::new(self.start.shifted_rows(rows), self.end.shifted_rows(rows))
    }
}

impl fmt::Display for RangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for RangeRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| format!("Range '{}' is missing ':'", s))?;
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}
