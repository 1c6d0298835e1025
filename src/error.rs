//! Error type shared by the converter and the query engine.
//!
//! Only fatal conditions are errors. Recoverable repairs (control
//! characters dropped from field text) are logged as warnings by the
//! escaper and processing continues.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while converting TSV exports or querying the JSON
/// documents.
#[derive(Debug, Error)]
pub enum ComicsError {
    /// A TSV line split into the wrong number of fields.
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A TSV field was not wrapped in double quotes.
    #[error("field {index} is not quote-delimited: {text:?}")]
    BareField { index: usize, text: String },

    /// A record key column did not parse as an integer.
    #[error("record key {value:?} is not an integer")]
    BadKey { value: String },

    /// One or both JSON inputs are absent from the data directory.
    #[error("couldn't find {what} JSON file in {}", .dir.display())]
    MissingInput { what: &'static str, dir: PathBuf },

    /// A JSON input's top level was something other than an array.
    #[error("JSON {kind} file should be an array of objects")]
    NotAnArray { kind: &'static str },

    /// A sequence array element was something other than an object.
    #[error("sequence array element should be an object")]
    NotAnObject,

    /// A field that must hold a string held some other type.
    #[error("value of {field} field should be a string")]
    NotAString { field: String },

    /// A sequence record lacked a required field.
    #[error("sequence record has no {field} field")]
    MissingField { field: &'static str },

    /// A field name does not fit the fixed-width query layout.
    #[error("field {name} too long")]
    NameTooLong { name: String },

    /// A rendered field held a type the layout cannot show.
    #[error("unknown type for field {name:?}")]
    UnknownType { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A JSON input failed to parse.
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
