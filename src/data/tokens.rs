//! Reader for the marked dataset file format.

use crate::error::{EvalError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A dataset file split into its shape marker and tokenized records.
///
/// The file format is UTF-8 text. The first non-blank line must start with
/// `#`; its trimmed remainder is the shape marker. Every following non-blank
/// line is split on whitespace into one record. Blank lines are skipped and
/// never counted as records.
#[derive(Debug, Clone)]
pub struct MarkedFile {
    /// The shape marker, e.g. `values` or `partition`.
    pub marker: String,
    /// Whitespace-tokenized records, one per non-blank line.
    pub records: Vec<Vec<String>>,
}

impl MarkedFile {
    /// Read and tokenize a dataset file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read and tokenize a dataset from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut marker: Option<String> = None;
        let mut records = Vec::new();

        for line_result in reader.lines() {
            let line = line_result?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match &marker {
                None => {
                    let rest = trimmed
                        .strip_prefix('#')
                        .ok_or(EvalError::MissingMarker)?;
                    marker = Some(rest.trim().to_string());
                }
                Some(_) => {
                    let tokens: Vec<String> =
                        trimmed.split_whitespace().map(str::to_string).collect();
                    records.push(tokens);
                }
            }
        }

        let marker = marker.ok_or(EvalError::MissingMarker)?;
        Ok(Self { marker, records })
    }
}
