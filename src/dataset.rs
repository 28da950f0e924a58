//! Loading integer datasets from whitespace-separated text.
//!
//! Every token on every line is read into one flat sequence in input order. Line
//! boundaries only separate text; they are kept around for error reporting.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("invalid integer '{token}' at line {line}: {source}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl DatasetError {
    /// The 1-based line the failure happened on, if it got that far.
    pub fn line(&self) -> Option<usize> {
        match self {
            DatasetError::Open { .. } => None,
            DatasetError::Read { line, .. } | DatasetError::Parse { line, .. } => Some(*line),
        }
    }
}

/// Loads every integer in the file at `path`.
///
/// The file handle is dropped on every return path.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<i32>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let numbers = read_dataset(BufReader::new(file))?;
    debug!(path = %path.display(), len = numbers.len(), "loaded dataset");
    Ok(numbers)
}

/// Reads every integer from `reader`. A single malformed token aborts the whole read.
pub fn read_dataset<R: BufRead>(reader: R) -> Result<Vec<i32>, DatasetError> {
    let mut numbers = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| DatasetError::Read {
            line: line_no,
            source,
        })?;
        parse_line(&line, line_no, &mut numbers)?;
    }
    Ok(numbers)
}

pub fn parse_dataset(text: &str) -> Result<Vec<i32>, DatasetError> {
    read_dataset(text.as_bytes())
}

fn parse_line(line: &str, line_no: usize, out: &mut Vec<i32>) -> Result<(), DatasetError> {
    let before = out.len();
    for token in line.split_whitespace() {
        let value = token.parse::<i32>().map_err(|source| DatasetError::Parse {
            line: line_no,
            token: token.to_owned(),
            source,
        })?;
        out.push(value);
    }
    trace!(line = line_no, tokens = out.len() - before, "parsed line");
    Ok(())
}
