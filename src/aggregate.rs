//! Grouping of export lines into logical records.
//!
//! Consecutive export lines that share their key column(s) describe one
//! record, one field per line. The aggregators detect the key change,
//! hand back the finished record, and seed the next one with its key
//! field. Duplicate field names within one record overwrite silently.

use crate::error::ComicsError;
use crate::record::Record;

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

/// Builds issue records from (id, name, value) lines.
///
/// The key is the `id` column parsed as an integer; a line with a new id
/// finishes the record under construction.
#[derive(Debug, Default)]
pub struct IssueAggregator {
    current: Record,
    last_id: Option<i64>,
}

impl IssueAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one export line; returns the finished record when this line
    /// starts a new one.
    pub fn push(
        &mut self,
        id: String,
        name: String,
        value: String,
    ) -> Result<Option<Record>, ComicsError> {
        let key: i64 = id
            .parse()
            .map_err(|_| ComicsError::BadKey { value: id.clone() })?;
        let mut finished = None;
        if self.last_id != Some(key) {
            let done = std::mem::take(&mut self.current);
            if !done.is_empty() {
                finished = Some(done);
            }
            self.current.insert("id", id);
            self.last_id = Some(key);
        }
        self.current.insert(name, value);
        Ok(finished)
    }

    /// Finish the record still under construction, if any.
    pub fn finish(self) -> Option<Record> {
        if self.current.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Builds sequence records from (issue, sequence, name, value) lines.
///
/// The key is the (issue id, sequence id) pair; a change in either
/// member finishes the record. The sequence id only delimits records and
/// is never stored.
#[derive(Debug, Default)]
pub struct SequenceAggregator {
    current: Record,
    last_key: Option<(String, String)>,
}

impl SequenceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one export line; returns the finished record when this line
    /// starts a new one.
    pub fn push(
        &mut self,
        issue: String,
        sequence: String,
        name: String,
        value: String,
    ) -> Option<Record> {
        let key = (issue, sequence);
        let mut finished = None;
        if self.last_key.as_ref() != Some(&key) {
            let done = std::mem::take(&mut self.current);
            if !done.is_empty() {
                finished = Some(done);
            }
            self.current.insert("issue", key.0.clone());
            self.last_key = Some(key);
        }
        self.current.insert(name, value);
        finished
    }

    /// Finish the record still under construction, if any.
    pub fn finish(self) -> Option<Record> {
        if self.current.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }
}
