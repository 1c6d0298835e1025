//! Creative-credit search over the JSON store.
//!
//! A query names one credit field (script, pencils, inks, colors) and a
//! search string. Every sequence record whose field value contains the
//! string is collected, grouped by issue id, and printed in a fixed
//! right-aligned layout:
//!
//! ```text
//! Issue: 57
//!             script: Will Eisner
//!              issue: 57
//! ```

use std::collections::BTreeMap;
use std::io::Write;

use serde_json::{Map, Value};

use crate::error::ComicsError;
use crate::store::Store;

/// The credit fields a query may target.
pub const CREDIT_FIELDS: [&str; 4] = ["script", "pencils", "inks", "colors"];

/// Widest field name the fixed layout can right-align.
const NAME_WIDTH: usize = 18;

/// Sequence records matching a query, grouped by ascending issue id.
///
/// Iterating the map yields groups in the order they must be rendered;
/// records within a group keep their source order.
pub type Groups<'a> = BTreeMap<i64, Vec<&'a Map<String, Value>>>;

// ---------------------------------------------------------------------------
// Matcher & Grouper
// ---------------------------------------------------------------------------

/// Collect the sequence records whose `field` value contains `needle`.
///
/// Only the first field with the target name is inspected and its value
/// must be a string; matching is case-sensitive. Each match's `issue`
/// field must hold a string that parses as an integer.
pub fn match_sequences<'a>(
    store: &'a Store,
    field: &str,
    needle: &str,
) -> Result<Groups<'a>, ComicsError> {
    let mut groups: Groups<'a> = BTreeMap::new();
    for record in store.sequences() {
        let Some(object) = record.as_object() else {
            return Err(ComicsError::NotAnObject);
        };
        let Some((name, value)) = object.iter().find(|(name, _)| name.as_str() == field) else {
            continue;
        };
        let Value::String(text) = value else {
            return Err(ComicsError::NotAString {
                field: name.clone(),
            });
        };
        if !text.contains(needle) {
            continue;
        }
        let issue = parse_issue(object)?;
        groups.entry(issue).or_default().push(object);
    }
    Ok(groups)
}

fn parse_issue(object: &Map<String, Value>) -> Result<i64, ComicsError> {
    let Some(value) = object.get("issue") else {
        return Err(ComicsError::MissingField { field: "issue" });
    };
    let Value::String(text) = value else {
        return Err(ComicsError::NotAString {
            field: "issue".to_string(),
        });
    };
    text.parse()
        .map_err(|_| ComicsError::BadKey { value: text.clone() })
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Print groups in ascending issue order.
///
/// One blank line separates records within a group and one separates
/// consecutive groups; there is no leading blank line and none after the
/// final record.
pub fn render_groups<W: Write>(mut out: W, groups: &Groups<'_>) -> Result<(), ComicsError> {
    let mut first_group = true;
    for (issue, records) in groups {
        if !first_group {
            writeln!(out)?;
        }
        writeln!(out, "Issue: {issue}")?;
        let mut first_record = true;
        for record in records {
            if !first_record {
                writeln!(out)?;
            }
            render_record(&mut out, record)?;
            first_record = false;
        }
        first_group = false;
    }
    Ok(())
}

fn render_record<W: Write>(out: &mut W, record: &Map<String, Value>) -> Result<(), ComicsError> {
    for (name, value) in record {
        if name.len() > NAME_WIDTH {
            return Err(ComicsError::NameTooLong { name: name.clone() });
        }
        write!(out, "{name:>width$}: ", width = NAME_WIDTH)?;
        match value {
            Value::String(text) => writeln!(out, "{text}")?,
            Value::Bool(flag) => writeln!(out, "{flag}")?,
            Value::Number(number) => writeln!(out, "{number}")?,
            _ => return Err(ComicsError::UnknownType { name: name.clone() }),
        }
    }
    Ok(())
}

/// Run a query and print its matches: Matcher, Grouper, and Renderer in
/// one pass.
pub fn print_matching<W: Write>(
    store: &Store,
    field: &str,
    needle: &str,
    out: W,
) -> Result<(), ComicsError> {
    let groups = match_sequences(store, field, needle)?;
    render_groups(out, &groups)
}
