//! JSON output formatting

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::metadata::FileRecord;

/// Structured dump of one scan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport<'a> {
    pub root_path: &'a Path,
    pub scanned_at: DateTime<Utc>,
    pub total_files: usize,
    pub total_size: u64,
    pub files: &'a [FileRecord],
}

impl<'a> ScanReport<'a> {
    pub fn new(root: &'a Path, records: &'a [FileRecord]) -> Self {
        Self {
            root_path: root,
            scanned_at: Utc::now(),
            total_files: records.len(),
            total_size: records.iter().map(|r| r.size_bytes).sum(),
            files: records,
        }
    }
}

pub fn format_json(report: &ScanReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_json(report: &ScanReport<'_>) -> io::Result<()> {
    let json = format_json(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
