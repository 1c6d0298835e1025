//! # comics-rs
//!
//! Tools for Grand Comics Database tab-separated exports: a converter
//! that turns the issue and creative-credit ("sequence") exports into
//! JSON documents, and a query engine that searches those credits by
//! creator name.
//!
//! Two binaries drive the library:
//!
//! - `gcd-convert <datadir>` converts every `*issues.tsv` and
//!   `*sequences.tsv` file into a `.json` sibling
//! - `comics-query <jsondir> (-s|-p|-i|-c) <name>` prints the matching
//!   credit records grouped by issue
//!
//! ## Example
//!
//! ```
//! use comics_rs::{Layout, convert_sequences, write_document};
//!
//! let tsv = "\"7\"\t\"1\"\t\"inks\"\t\"Smith\"\n\
//!            \"7\"\t\"1\"\t\"colors\"\t\"True\"\n";
//! let records = convert_sequences(tsv.as_bytes()).unwrap();
//! assert_eq!(records.len(), 1);
//!
//! let mut json = Vec::new();
//! write_document(&mut json, &records, Layout::Compact).unwrap();
//! let json = String::from_utf8(json).unwrap();
//! assert!(json.contains(r#""colors": true"#));
//! assert!(json.contains(r#""issue": "7""#));
//! ```

pub mod aggregate;
pub mod convert;
pub mod error;
pub mod escape;
pub mod query;
pub mod record;
pub mod split;
pub mod store;
pub mod writer;

pub use aggregate::{IssueAggregator, SequenceAggregator};
pub use convert::{
    convert_dir, convert_issues, convert_issues_file, convert_sequences, convert_sequences_file,
};
pub use error::ComicsError;
pub use escape::escape_json;
pub use query::{CREDIT_FIELDS, Groups, match_sequences, print_matching, render_groups};
pub use record::Record;
pub use split::{ISSUE_FIELDS, SEQUENCE_FIELDS, split_issue_line, split_line, split_sequence_line};
pub use store::Store;
pub use writer::{Layout, write_document};
