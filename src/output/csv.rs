//! CSV output formatting

use std::io::{self, Write};

use crate::metadata::FileRecord;

use super::utils::format_timestamp;

pub const CSV_HEADER: &str = "name,relativePath,size,extension,modified,created";

/// Quote a field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub fn format_csv_row(record: &FileRecord) -> String {
    format!(
        "{},{},{},{},{},{}",
        quote(&record.name),
        quote(&record.relative_path),
        record.size_bytes,
        quote(&record.extension),
        quote(&format_timestamp(&record.modified_at)),
        quote(&format_timestamp(&record.created_at)),
    )
}

pub fn format_csv(records: &[FileRecord]) -> String {
    let mut output = String::from(CSV_HEADER);
    output.push('\n');
    for record in records {
        output.push_str(&format_csv_row(record));
        output.push('\n');
    }
    output
}

pub fn print_csv(records: &[FileRecord]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(format_csv(records).as_bytes())
}
