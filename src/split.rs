//! Tab-separated field splitting for GCD export lines.
//!
//! Export lines wrap every field in double quotes and join fields with a
//! single tab, so the effective separator is `"<TAB>"`:
//!
//! ```text
//! "57"	"title"	"The Spirit"
//! ```
//!
//! Splitting only unwraps the quotes. Escapes inside the field text (the
//! export writes a literal quote as `""`) are the writer's concern, not
//! the reader's.

use crate::error::ComicsError;

/// Field count of an issues export line: id, field name, field value.
pub const ISSUE_FIELDS: usize = 3;
/// Field count of a sequences export line: issue id, sequence id, field
/// name, field value.
pub const SEQUENCE_FIELDS: usize = 4;

/// Split one export line into its unwrapped field strings.
///
/// The line must yield exactly `expected` tab-separated fields, each
/// wrapped in double quotes; anything else is a fatal parse error.
pub fn split_line(line: &str, expected: usize) -> Result<Vec<String>, ComicsError> {
    let raw: Vec<&str> = line.split('\t').collect();
    if raw.len() != expected {
        return Err(ComicsError::FieldCount {
            expected,
            actual: raw.len(),
        });
    }
    raw.iter()
        .enumerate()
        .map(|(index, field)| {
            field
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .map(str::to_string)
                .ok_or_else(|| ComicsError::BareField {
                    index,
                    text: (*field).to_string(),
                })
        })
        .collect()
}

/// Split an issues line into (id, field name, field value).
pub fn split_issue_line(line: &str) -> Result<(String, String, String), ComicsError> {
    match <[String; ISSUE_FIELDS]>::try_from(split_line(line, ISSUE_FIELDS)?) {
        Ok([id, name, value]) => Ok((id, name, value)),
        Err(fields) => Err(ComicsError::FieldCount {
            expected: ISSUE_FIELDS,
            actual: fields.len(),
        }),
    }
}

/// Split a sequences line into (issue id, sequence id, field name,
/// field value).
pub fn split_sequence_line(line: &str) -> Result<(String, String, String, String), ComicsError> {
    match <[String; SEQUENCE_FIELDS]>::try_from(split_line(line, SEQUENCE_FIELDS)?) {
        Ok([issue, sequence, name, value]) => Ok((issue, sequence, name, value)),
        Err(fields) => Err(ComicsError::FieldCount {
            expected: SEQUENCE_FIELDS,
            actual: fields.len(),
        }),
    }
}
