//! Line-oriented integer input.
//!
//! Each source holds one record per line: either a single integer or a pair
//! of integers separated by whitespace. Readers consume exactly the requested
//! number of lines and ignore anything after them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Location, SetupError};

fn open(path: &Path) -> Result<BufReader<File>, SetupError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

fn parse_pair(text: &str) -> Option<(i64, i64)> {
    let mut parts = text.split_whitespace();
    let from = parts.next()?.parse().ok()?;
    let to = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}

/// Reads `count` records, parsing each line with `parse`.
fn parse_records<R, T>(
    reader: R,
    source_name: &str,
    count: usize,
    expected: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, SetupError>
where
    R: BufRead,
{
    let mut records = Vec::with_capacity(count);
    for (idx, line) in reader.split(b'\n').take(count).enumerate() {
        let mut bytes = line.map_err(|source| SetupError::Read {
            source_name: source_name.to_string(),
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let malformed = |text: String| SetupError::MalformedInput {
            at: Location::new(source_name, idx + 1),
            expected,
            text,
        };
        let line = std::str::from_utf8(&bytes)
            .map_err(|_| malformed(String::from_utf8_lossy(&bytes).into_owned()))?;
        let record = parse(line).ok_or_else(|| malformed(line.to_string()))?;
        records.push(record);
    }

    if records.len() < count {
        return Err(SetupError::TruncatedInput {
            source_name: source_name.to_string(),
            expected: count,
            found: records.len(),
        });
    }
    Ok(records)
}

/// Parses `count` single-integer lines from `reader`.
pub fn parse_ints<R: BufRead>(reader: R, source_name: &str, count: usize) -> Result<Vec<i64>, SetupError> {
    parse_records(reader, source_name, count, "an integer", parse_int)
}

/// Parses `count` lines of `"from to"` integer pairs from `reader`.
pub fn parse_int_pairs<R: BufRead>(
    reader: R,
    source_name: &str,
    count: usize,
) -> Result<Vec<(i64, i64)>, SetupError> {
    parse_records(reader, source_name, count, "two integers", parse_pair)
}

/// Reads the integer on the first line of the file at `path`.
pub fn read_int(path: &Path) -> Result<i64, SetupError> {
    let values = read_ints(path, 1)?;
    Ok(values[0])
}

/// Reads exactly `count` single-integer lines from the file at `path`.
pub fn read_ints(path: &Path, count: usize) -> Result<Vec<i64>, SetupError> {
    debug!("reading {} integer(s) from {}", count, path.display());
    parse_ints(open(path)?, &path.display().to_string(), count)
}

/// Reads exactly `count` integer-pair lines from the file at `path`.
pub fn read_int_pairs(path: &Path, count: usize) -> Result<Vec<(i64, i64)>, SetupError> {
    debug!("reading {} pair(s) from {}", count, path.display());
    parse_int_pairs(open(path)?, &path.display().to_string(), count)
}
