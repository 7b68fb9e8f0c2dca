//! Append-only metric logs
//!
//! Two files live in the log directory: `metrics.csv` (tabular, header row
//! written once on creation) and `metrics.jsonl` (one JSON object per line).
//! Neither file is ever truncated or rewritten.

pub mod record;

pub use record::{csv_header, SampleRecord, CSV_HEADER};

use crate::domain::Sample;
use crate::error::StoreError;

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File name of the tabular log
pub const CSV_FILE_NAME: &str = "metrics.csv";
/// File name of the structured log
pub const JSONL_FILE_NAME: &str = "metrics.jsonl";

/// The pair of log files under one directory
#[derive(Debug, Clone)]
pub struct LogStore {
    dir: PathBuf,
    csv_path: PathBuf,
    jsonl_path: PathBuf,
}

impl LogStore {
    /// Create a store rooted at `dir` (nothing is touched on disk)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            csv_path: dir.join(CSV_FILE_NAME),
            jsonl_path: dir.join(JSONL_FILE_NAME),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn jsonl_path(&self) -> &Path {
        &self.jsonl_path
    }

    /// Make sure the directory and both files exist
    ///
    /// The CSV header is written only when this call creates the file.
    pub fn ensure(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.csv_path)
        {
            Ok(mut file) => {
                writeln!(file, "{}", csv_header()).map_err(|source| StoreError::Write {
                    path: self.csv_path.clone(),
                    source,
                })?;
                log::info!("Created {}", self.csv_path.display());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(source) => {
                return Err(StoreError::Open {
                    path: self.csv_path.clone(),
                    source,
                })
            }
        }

        if !self.jsonl_path.exists() {
            open_append(&self.jsonl_path)?;
            log::info!("Created {}", self.jsonl_path.display());
        }

        Ok(())
    }

    /// Append one row to the CSV log and one line to the JSONL log
    pub fn append(&self, sample: &Sample) -> Result<(), StoreError> {
        let record = SampleRecord::from(sample);

        append_line(&self.csv_path, &record.to_csv_row())?;
        append_line(&self.jsonl_path, &record.to_json_line()?)?;

        log::debug!("Appended sample {} to {}", record.timestamp, self.dir.display());
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File, StoreError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn append_line(path: &Path, line: &str) -> Result<(), StoreError> {
    let mut file = open_append(path)?;
    writeln!(file, "{}", line).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
