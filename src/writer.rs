//! JSON document serialization for converted records.

use std::io::{self, Write};

use crate::escape::escape_json;
use crate::record::Record;

/// Output layout for a JSON document.
///
/// Both layouts carry identical content and differ only in whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Each field on its own indented line.
    Pretty,
    /// Each record on a single line.
    Compact,
}

/// Serialize records as a JSON array of objects.
///
/// Field names are sorted ascending within each object. The literal
/// values `True` and `False` become JSON booleans; every other value is
/// written as an escaped JSON string — the converter never emits numeric
/// JSON values.
pub fn write_document<W: Write>(
    mut out: W,
    records: &[Record],
    layout: Layout,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "[]");
    }
    writeln!(out, "[")?;
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(out, ",")?;
        }
        write_record(&mut out, record, layout)?;
    }
    writeln!(out, "\n]")
}

fn write_record<W: Write>(out: &mut W, record: &Record, layout: Layout) -> io::Result<()> {
    write!(out, "{{")?;
    for (i, (name, value)) in record.sorted_fields().into_iter().enumerate() {
        if i > 0 {
            write!(out, ",")?;
        }
        match layout {
            Layout::Pretty => write!(out, "\n    ")?,
            Layout::Compact => {
                if i > 0 {
                    write!(out, " ")?;
                }
            }
        }
        write!(out, "\"{}\": {}", escape_json(name), encode_value(value))?;
    }
    match layout {
        Layout::Pretty => write!(out, "\n}}"),
        Layout::Compact => write!(out, "}}"),
    }
}

fn encode_value(value: &str) -> String {
    match value {
        "True" => "true".to_string(),
        "False" => "false".to_string(),
        other => format!("\"{}\"", escape_json(other)),
    }
}
