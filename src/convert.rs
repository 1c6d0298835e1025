//! Converter drivers: TSV export files to JSON documents.
//!
//! `gcd-convert` points these at a data directory; every `*issues.tsv`
//! or `*sequences.tsv` file found there becomes a `.json` sibling.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::aggregate::{IssueAggregator, SequenceAggregator};
use crate::error::ComicsError;
use crate::record::Record;
use crate::split::{split_issue_line, split_sequence_line};
use crate::writer::{Layout, write_document};

/// Convert an issues export stream into records.
pub fn convert_issues<R: BufRead>(input: R) -> Result<Vec<Record>, ComicsError> {
    let mut records = Vec::new();
    let mut agg = IssueAggregator::new();
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let (id, name, value) = split_issue_line(&line)?;
        if let Some(done) = agg.push(id, name, value)? {
            records.push(done);
        }
    }
    if let Some(done) = agg.finish() {
        records.push(done);
    }
    Ok(records)
}

/// Convert a sequences export stream into records.
pub fn convert_sequences<R: BufRead>(input: R) -> Result<Vec<Record>, ComicsError> {
    let mut records = Vec::new();
    let mut agg = SequenceAggregator::new();
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let (issue, sequence, name, value) = split_sequence_line(&line)?;
        if let Some(done) = agg.push(issue, sequence, name, value) {
            records.push(done);
        }
    }
    if let Some(done) = agg.finish() {
        records.push(done);
    }
    Ok(records)
}

/// Convert one issues export file, writing its `.json` sibling.
///
/// Records are built fully in memory first; the output file is only
/// created once conversion has succeeded, so a parse failure leaves no
/// partial output behind.
pub fn convert_issues_file(path: &Path, layout: Layout) -> Result<PathBuf, ComicsError> {
    let out_path = path.with_extension("json");
    info!("converting issues at {} to {}", path.display(), out_path.display());
    let records = convert_issues(BufReader::new(File::open(path)?))?;
    write_records(&out_path, &records, layout)?;
    info!("{} records written", records.len());
    Ok(out_path)
}

/// Convert one sequences export file, writing its `.json` sibling.
pub fn convert_sequences_file(path: &Path, layout: Layout) -> Result<PathBuf, ComicsError> {
    let out_path = path.with_extension("json");
    info!(
        "converting sequences at {} to {}",
        path.display(),
        out_path.display()
    );
    let records = convert_sequences(BufReader::new(File::open(path)?))?;
    write_records(&out_path, &records, layout)?;
    info!("{} records written", records.len());
    Ok(out_path)
}

fn write_records(path: &Path, records: &[Record], layout: Layout) -> Result<(), ComicsError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_document(&mut out, records, layout)?;
    out.flush()?;
    Ok(())
}

/// Scan a directory for `*issues.tsv` and `*sequences.tsv` exports and
/// convert each one. Returns how many files were converted.
pub fn convert_dir(dir: &Path, layout: Layout) -> Result<usize, ComicsError> {
    let mut converted = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("tsv") {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        if stem.ends_with("issues") {
            convert_issues_file(&path, layout)?;
            converted += 1;
        } else if stem.ends_with("sequences") {
            convert_sequences_file(&path, layout)?;
            converted += 1;
        }
    }
    if converted == 0 {
        warn!("no issues or sequences .tsv files in {}", dir.display());
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_issues_groups_consecutive_lines() {
        let tsv = "\"1\"\t\"title\"\t\"A\"\n\"1\"\t\"price\"\t\"0.10\"\n\"2\"\t\"title\"\t\"B\"\n";
        let records = convert_issues(tsv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some("1"));
        assert_eq!(records[0].get("price"), Some("0.10"));
        assert_eq!(records[1].get("id"), Some("2"));
        assert_eq!(records[1].get("title"), Some("B"));
    }

    #[test]
    fn test_convert_sequences_pair_boundary() {
        let tsv = "\"1\"\t\"10\"\t\"script\"\t\"Alice\"\n\
                   \"1\"\t\"10\"\t\"pencils\"\t\"Bob\"\n\
                   \"1\"\t\"11\"\t\"script\"\t\"Carol\"\n";
        let records = convert_sequences(tsv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("issue"), Some("1"));
        assert_eq!(records[0].get("script"), Some("Alice"));
        assert_eq!(records[0].get("pencils"), Some("Bob"));
        assert_eq!(records[1].get("issue"), Some("1"));
        assert_eq!(records[1].get("script"), Some("Carol"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let tsv = "\"1\"\t\"title\"\t\"A\"\n\n\"1\"\t\"price\"\t\"0.10\"\n";
        let records = convert_issues(tsv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 3);
    }

    #[test]
    fn test_short_line_is_fatal() {
        let err = convert_issues("\"1\"\t\"title\"\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ComicsError::FieldCount {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        assert!(convert_issues("".as_bytes()).unwrap().is_empty());
        assert!(convert_sequences("".as_bytes()).unwrap().is_empty());
    }
}
