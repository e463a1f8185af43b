use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::extract::format::FormatSpec;
use crate::utils::{PayloadError, Result};

/// Parses a `--column` value as a 1-based positional index, returning the
/// 0-based index. `Ok(None)` means the value is not numeric and should be
/// treated as a header name.
pub fn parse_column_index(column: &str) -> Result<Option<usize>> {
    if column.is_empty() || !column.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    let index: usize = column
        .parse()
        .map_err(|_| PayloadError::Config(format!("invalid column index '{column}'")))?;
    if index == 0 {
        return Err(PayloadError::Config(
            "column indexes are 1-based, got 0".to_string(),
        ));
    }
    Ok(Some(index - 1))
}

/// Lazy stream of identity values extracted from one input file. Owns the
/// file handle for its lifetime; dropping the reader closes the file.
pub enum IdentityReader {
    Lines(LineIdentities),
    Delimited(DelimitedIdentities),
}

impl IdentityReader {
    pub fn open(path: &Path, spec: &FormatSpec, column: Option<&str>) -> Result<Self> {
        match spec.kind.delimiter() {
            None => Ok(Self::Lines(LineIdentities::open(path, spec.has_header)?)),
            Some(delimiter) => Ok(Self::Delimited(DelimitedIdentities::open(
                path,
                delimiter,
                spec.has_header,
                column,
            )?)),
        }
    }
}

impl Iterator for IdentityReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Lines(inner) => inner.next(),
            Self::Delimited(inner) => inner.next(),
        }
    }
}

/// Line mode: one identity per line, surrounding whitespace trimmed.
pub struct LineIdentities {
    lines: Lines<BufReader<File>>,
}

impl LineIdentities {
    fn open(path: &Path, has_header: bool) -> Result<Self> {
        let mut lines = BufReader::new(File::open(path)?).lines();
        if has_header {
            if let Some(first) = lines.next() {
                first?;
            }
        }
        Ok(Self { lines })
    }
}

impl Iterator for LineIdentities {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(
            line.map(|l| l.trim().to_string())
                .map_err(PayloadError::from),
        )
    }
}

/// Delimited mode: yields one selected field per record. The reader is
/// flexible, so ragged rows parse and a too-short row surfaces as
/// `RowTooShort` rather than a csv-level error.
pub struct DelimitedIdentities {
    records: StringRecordsIntoIter<File>,
    column: usize,
    record: u64,
}

impl DelimitedIdentities {
    fn open(path: &Path, delimiter: u8, has_header: bool, column: Option<&str>) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(has_header)
            .flexible(true)
            .from_reader(file);

        let column = if has_header {
            let headers = reader.headers()?.clone();
            resolve_column(&headers, column)?
        } else {
            match column {
                Some(value) => match parse_column_index(value)? {
                    Some(index) => index,
                    None => {
                        tracing::warn!(
                            "ignoring column name '{value}' for headerless input, \
                             using position 1"
                        );
                        0
                    }
                },
                None => 0,
            }
        };

        Ok(Self {
            records: reader.into_records(),
            column,
            record: 0,
        })
    }
}

fn resolve_column(headers: &StringRecord, column: Option<&str>) -> Result<usize> {
    let Some(column) = column else {
        return Ok(0);
    };
    if let Some(index) = parse_column_index(column)? {
        if index >= headers.len() {
            return Err(PayloadError::ColumnIndexOutOfRange {
                index: index + 1,
                width: headers.len(),
            });
        }
        return Ok(index);
    }
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| PayloadError::ColumnNotFound {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

impl Iterator for DelimitedIdentities {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        self.record += 1;
        match record.get(self.column) {
            Some(value) => Some(Ok(value.to_string())),
            None => Some(Err(PayloadError::RowTooShort {
                record: self.record,
                width: record.len(),
                column: self.column + 1,
            })),
        }
    }
}
