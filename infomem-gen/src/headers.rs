use std::path::Path;

use crate::error::GenerateError;

/// Number of columns in a well formed header export row.
const FIELD_COUNT: usize = 5;

/// One row of the header CSV export, still in its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    pub name: String,
    /// `ORIGIN = 0x...`
    pub origin: String,
    /// `LENGTH = 0x...`
    pub length: String,
    /// Not used for the table.
    pub end: String,
    /// `SIZE n AS m k-BYTE SEGMENTS`
    pub sectors: String,
}

impl HeaderRecord {
    fn from_record(record: &csv::StringRecord) -> Option<Self> {
        if record.len() != FIELD_COUNT {
            return None;
        }

        Some(HeaderRecord {
            name: record[0].to_owned(),
            origin: record[1].to_owned(),
            length: record[2].to_owned(),
            end: record[3].to_owned(),
            sectors: record[4].to_owned(),
        })
    }
}

/// Reads all header records from the CSV file at `path`.
pub fn read_headers(path: &Path) -> Result<Vec<HeaderRecord>, GenerateError> {
    let file = std::fs::File::open(path).map_err(|source| GenerateError::Io {
        source,
        path: path.to_owned(),
    })?;

    parse_headers(file).map_err(|source| GenerateError::Csv {
        source,
        path: path.to_owned(),
    })
}

/// Reads header records from a CSV stream without a header row.
///
/// Rows that do not have exactly five fields are skipped.
pub fn parse_headers(reader: impl std::io::Read) -> Result<Vec<HeaderRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;

        match HeaderRecord::from_record(&record) {
            Some(header) => records.push(header),
            None => tracing::debug!(
                "Skipping malformed row at line {}: expected {} fields, found {}.",
                record.position().map_or(0, |p| p.line()),
                FIELD_COUNT,
                record.len()
            ),
        }
    }

    Ok(records)
}
