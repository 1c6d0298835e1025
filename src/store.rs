//! Read-only access to the converted JSON documents.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::ComicsError;

/// The two JSON documents a query runs against.
///
/// Loading is eager: both files are parsed fully before any query runs.
/// Each `load` call is self-contained; nothing is shared between stores.
#[derive(Debug)]
pub struct Store {
    issues: Vec<Value>,
    sequences: Vec<Value>,
}

impl Store {
    /// Load the issues and sequences documents from a directory.
    ///
    /// Files are recognized by filename suffix: the first regular file
    /// ending in `issues.json` and the first ending in `sequences.json`
    /// win. Both must be top-level JSON arrays.
    pub fn load(dir: &Path) -> Result<Self, ComicsError> {
        let mut issues: Option<Vec<Value>> = None;
        let mut sequences: Option<Vec<Value>> = None;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if filename.ends_with("issues.json") && issues.is_none() {
                info!("reading issues from {}", path.display());
                issues = Some(load_array(&path, "issues")?);
                info!("done");
            } else if filename.ends_with("sequences.json") && sequences.is_none() {
                info!("reading sequences from {}", path.display());
                sequences = Some(load_array(&path, "sequences")?);
                info!("done");
            }
        }
        match (issues, sequences) {
            (Some(issues), Some(sequences)) => Ok(Self { issues, sequences }),
            (Some(_), None) => Err(ComicsError::MissingInput {
                what: "sequences",
                dir: dir.to_path_buf(),
            }),
            (None, Some(_)) => Err(ComicsError::MissingInput {
                what: "issues",
                dir: dir.to_path_buf(),
            }),
            (None, None) => Err(ComicsError::MissingInput {
                what: "either issues or sequences",
                dir: dir.to_path_buf(),
            }),
        }
    }

    /// Issue records in file order.
    pub fn issues(&self) -> &[Value] {
        &self.issues
    }

    /// Sequence records in file order.
    pub fn sequences(&self) -> &[Value] {
        &self.sequences
    }

    #[cfg(test)]
    pub(crate) fn from_parts(issues: Vec<Value>, sequences: Vec<Value>) -> Self {
        Self { issues, sequences }
    }
}

fn load_array(path: &Path, kind: &'static str) -> Result<Vec<Value>, ComicsError> {
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&text).map_err(|source| ComicsError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match doc {
        Value::Array(elements) => Ok(elements),
        _ => Err(ComicsError::NotAnArray { kind }),
    }
}
