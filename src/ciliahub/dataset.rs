//! The record store: the full gene table, loaded exactly once per session
//! and immutable afterwards.
//!
//! Loading is a single attempt — one HTTP GET or one file read. Any failure
//! (I/O, non-success status, malformed JSON) surfaces as
//! [`CiliaHubError::LoadFailure`] and no partial table is ever produced.
//! Retry and backoff are host concerns, not the store's.

use crate::error::{CiliaHubError, Result};
use crate::model::GeneRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The published CiliaHub dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/rarediseaselab/home/main/ciliahub_data.json";

/// Read-only ordered sequence of gene records.
#[derive(Debug, Clone, Default)]
pub struct GeneTable {
    records: Vec<GeneRecord>,
}

impl GeneTable {
    pub fn new(records: Vec<GeneRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse a JSON array of gene records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<GeneRecord> =
            serde_json::from_reader(reader).map_err(|e| CiliaHubError::LoadFailure {
                cause: format!("malformed gene table JSON: {}", e),
            })?;
        Ok(Self::new(records))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CiliaHubError::LoadFailure {
            cause: format!("cannot open {}: {}", path.display(), e),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Single-attempt HTTP fetch of the JSON dataset.
    pub fn fetch(url: &str) -> Result<Self> {
        let response = reqwest::blocking::get(url).map_err(|e| CiliaHubError::LoadFailure {
            cause: format!("request to {} failed: {}", url, e),
        })?;
        if !response.status().is_success() {
            return Err(CiliaHubError::LoadFailure {
                cause: format!("{} answered {}", url, response.status()),
            });
        }
        let records: Vec<GeneRecord> =
            response.json().map_err(|e| CiliaHubError::LoadFailure {
                cause: format!("malformed gene table JSON from {}: {}", url, e),
            })?;
        Ok(Self::new(records))
    }
}

impl<'a> IntoIterator for &'a GeneTable {
    type Item = &'a GeneRecord;
    type IntoIter = std::slice::Iter<'a, GeneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
