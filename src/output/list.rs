//! Flat numbered listing of matched files

use std::io::{self, Write};

use crate::metadata::FileRecord;

use super::utils::format_bytes;

pub fn format_list(records: &[FileRecord]) -> String {
    if records.is_empty() {
        return "No files found matching the criteria.\n".to_string();
    }

    let mut output = format!("Found {} file(s):\n", records.len());
    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "  {:03}. {} ({})\n",
            i + 1,
            record.relative_path,
            format_bytes(record.size_bytes)
        ));
    }
    output
}

pub fn print_list(records: &[FileRecord]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(format_list(records).as_bytes())
}
