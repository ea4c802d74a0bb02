//! CSV ingestion implementation.
//!
//! The format is deliberately plain: one record per physical line, fields separated by
//! [`DELIMITER`], no quoting or escaping. A `"` is ordinary field content, and a comma inside
//! quotes still splits the field. Blank lines are malformed records.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Employee, Roster, Salary};

/// Number of positional fields every data line must carry: name, age, department, salary.
pub const FIELD_COUNT: usize = 4;

/// Field separator.
pub const DELIMITER: char = ',';

/// Ingest a CSV file into an in-memory [`Roster`].
///
/// Rules:
///
/// - The first line is a header and is discarded without validation.
/// - Fields are positional: `name, age, department, salary`, each trimmed of surrounding
///   whitespace. Extra columns are ignored.
/// - The first malformed line aborts ingestion; no partial roster is returned.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<Roster> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestionError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_roster(BufReader::new(file), path)
}

/// Ingest CSV data from any buffered reader, with the same rules as [`ingest_csv_from_path`].
pub fn ingest_csv_from_reader<R: BufRead>(reader: R) -> IngestionResult<Roster> {
    read_roster(reader, Path::new("<reader>"))
}

fn read_roster<R: BufRead>(reader: R, source: &Path) -> IngestionResult<Roster> {
    let mut records = Vec::new();
    // Line 1 is the header.
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line_no = idx as u64 + 1;
        let line = line.map_err(|e| classify_read_error(e, line_no, source))?;
        records.push(parse_line(&line, line_no)?);
    }
    Ok(Roster::new(records))
}

/// Parse one data line (without its terminator) into an [`Employee`].
///
/// `line_no` is the 1-based physical line used in error messages.
pub fn parse_line(line: &str, line_no: u64) -> IngestionResult<Employee> {
    if line.trim().is_empty() {
        return Err(malformed(line_no, "blank line".to_owned()));
    }

    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() < FIELD_COUNT {
        return Err(malformed(
            line_no,
            format!(
                "expected {FIELD_COUNT} fields (name, age, department, salary), found {}",
                fields.len()
            ),
        ));
    }

    let raw_age = fields[1];
    let age = raw_age
        .parse::<u32>()
        .map_err(|e| malformed(line_no, format!("invalid age '{raw_age}': {e}")))?;

    let raw_salary = fields[3];
    let salary = raw_salary
        .parse::<Salary>()
        .map_err(|e| malformed(line_no, format!("invalid salary '{raw_salary}': {e}")))?;

    Ok(Employee::new(fields[0], age, fields[2], salary))
}

fn malformed(line: u64, message: String) -> IngestionError {
    IngestionError::MalformedRecord { line, message }
}

// Undecodable bytes are a problem with the line itself; any other read failure means the source
// became unreadable.
fn classify_read_error(err: io::Error, line: u64, source: &Path) -> IngestionError {
    match err.kind() {
        io::ErrorKind::InvalidData => malformed(line, err.to_string()),
        _ => IngestionError::SourceUnavailable {
            path: source.to_path_buf(),
            source: err,
        },
    }
}
