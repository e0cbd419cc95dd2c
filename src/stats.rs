//! Aggregate statistics over matched files
//!
//! This module collects and formats totals, an extension histogram and a
//! fixed size distribution for the records a scan produced.

use std::collections::HashMap;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::metadata::FileRecord;
use crate::output::{OutputConfig, format_bytes};

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Histogram label for files without an extension.
pub const NO_EXTENSION: &str = "(no extension)";

/// Collected statistics about the matched files.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub total_files: usize,
    pub total_size: u64,
    /// Floor of total_size / total_files; 0 when nothing matched
    pub average_size: u64,
    /// Sorted by file count descending, then extension
    pub by_extension: Vec<ExtensionCount>,
    pub size_distribution: SizeDistribution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCount {
    pub extension: String,
    pub files: usize,
}

/// File counts per size bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeDistribution {
    /// < 1KB
    pub under_1kb: usize,
    /// [1KB, 1MB)
    pub kb_to_mb: usize,
    /// [1MB, 1GB)
    pub mb_to_gb: usize,
    /// >= 1GB
    pub over_1gb: usize,
}

impl SizeDistribution {
    fn record(&mut self, size: u64) {
        match size {
            s if s < KB => self.under_1kb += 1,
            s if s < MB => self.kb_to_mb += 1,
            s if s < GB => self.mb_to_gb += 1,
            _ => self.over_1gb += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.under_1kb + self.kb_to_mb + self.mb_to_gb + self.over_1gb
    }

    fn rows(&self) -> [(&'static str, usize); 4] {
        [
            ("< 1KB", self.under_1kb),
            ("1KB - 1MB", self.kb_to_mb),
            ("1MB - 1GB", self.mb_to_gb),
            (">= 1GB", self.over_1gb),
        ]
    }
}

/// Statistics collector that accumulates data record by record.
#[derive(Debug, Default)]
pub struct StatsCollector {
    files: usize,
    total_size: u64,
    by_extension: HashMap<String, usize>,
    distribution: SizeDistribution,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched file in the statistics.
    pub fn record_file(&mut self, record: &FileRecord) {
        self.files += 1;
        self.total_size += record.size_bytes;

        let ext = if record.extension.is_empty() {
            NO_EXTENSION.to_string()
        } else {
            record.extension.clone()
        };
        *self.by_extension.entry(ext).or_insert(0) += 1;

        self.distribution.record(record.size_bytes);
    }

    /// Finalize and return the collected statistics.
    pub fn finalize(self) -> ScanStats {
        let mut by_extension: Vec<ExtensionCount> = self
            .by_extension
            .into_iter()
            .map(|(extension, files)| ExtensionCount { extension, files })
            .collect();

        // Sort by file count descending, ties by extension
        by_extension.sort_by(|a, b| {
            b.files
                .cmp(&a.files)
                .then_with(|| a.extension.cmp(&b.extension))
        });

        let average_size = if self.files == 0 {
            0
        } else {
            self.total_size / self.files as u64
        };

        ScanStats {
            total_files: self.files,
            total_size: self.total_size,
            average_size,
            by_extension,
            size_distribution: self.distribution,
        }
    }
}

impl ScanStats {
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut collector = StatsCollector::new();
        for record in records {
            collector.record_file(record);
        }
        collector.finalize()
    }
}

/// Write statistics, colouring headers and labels when `out` supports it.
pub fn write_stats<W: WriteColor>(stats: &ScanStats, out: &mut W) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    let mut label_color = ColorSpec::new();
    label_color.set_fg(Some(Color::Cyan));

    // Header
    out.set_color(&bold)?;
    writeln!(out, "Scan Statistics")?;
    out.reset()?;
    writeln!(out, "───────────────")?;

    // Summary
    writeln!(out, "Total files:   {}", stats.total_files)?;
    writeln!(
        out,
        "Total size:    {} ({} bytes)",
        format_bytes(stats.total_size),
        stats.total_size
    )?;
    writeln!(out, "Average size:  {}", format_bytes(stats.average_size))?;
    writeln!(out)?;

    // By extension
    if !stats.by_extension.is_empty() {
        out.set_color(&bold)?;
        writeln!(out, "By Extension:")?;
        out.reset()?;

        for entry in &stats.by_extension {
            write!(out, "  ")?;
            out.set_color(&label_color)?;
            write!(out, "{:<16}", entry.extension)?;
            out.reset()?;
            writeln!(out, "{:>6} files", entry.files)?;
        }
        writeln!(out)?;
    }

    // Size distribution
    out.set_color(&bold)?;
    writeln!(out, "Size Distribution:")?;
    out.reset()?;
    for (label, count) in stats.size_distribution.rows() {
        write!(out, "  ")?;
        out.set_color(&label_color)?;
        write!(out, "{:<16}", label)?;
        out.reset()?;
        writeln!(out, "{:>6} files", count)?;
    }

    Ok(())
}

/// Render statistics to a plain string.
pub fn format_stats(stats: &ScanStats) -> String {
    let mut out = NoColor::new(Vec::new());
    // Writing into a Vec cannot fail
    let _ = write_stats(stats, &mut out);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

/// Print statistics to stdout.
pub fn print_stats(stats: &ScanStats, config: &OutputConfig) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(config.color_choice());
    write_stats(stats, &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    fn record(name: &str, extension: &str, size_bytes: u64) -> FileRecord {
        let now = Utc::now();
        FileRecord {
            name: name.to_string(),
            absolute_path: PathBuf::from("/data").join(name),
            relative_path: name.to_string(),
            size_bytes,
            extension: extension.to_string(),
            modified_at: now,
            created_at: now,
        }
    }

    #[test]
    fn test_stats_empty() {
        let stats = ScanStats::from_records(&[]);
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.total_size, 0);
        assert_eq!(stats.average_size, 0);
        assert!(stats.by_extension.is_empty());
        assert_eq!(stats.size_distribution.total(), 0);
    }

    #[test]
    fn test_stats_totals_and_histogram() {
        let records = vec![
            record("a.txt", ".txt", 10),
            record("b.log", ".log", 2048),
            record("d.txt", ".txt", 5),
            record("Makefile", "", 3 * MB),
        ];
        let stats = ScanStats::from_records(&records);

        assert_eq!(stats.total_files, 4);
        assert_eq!(stats.total_size, 10 + 2048 + 5 + 3 * MB);
        assert_eq!(stats.average_size, stats.total_size / 4);
        assert_eq!(
            stats.by_extension,
            vec![
                ExtensionCount {
                    extension: ".txt".to_string(),
                    files: 2
                },
                ExtensionCount {
                    extension: NO_EXTENSION.to_string(),
                    files: 1
                },
                ExtensionCount {
                    extension: ".log".to_string(),
                    files: 1
                },
            ]
        );
        assert_eq!(
            stats.size_distribution,
            SizeDistribution {
                under_1kb: 2,
                kb_to_mb: 1,
                mb_to_gb: 1,
                over_1gb: 0,
            }
        );
    }

    #[test]
    fn test_bucket_boundaries() {
        let records = vec![
            record("a", "", KB - 1),
            record("b", "", KB),
            record("c", "", MB - 1),
            record("d", "", MB),
            record("e", "", GB - 1),
            record("f", "", GB),
        ];
        let dist = ScanStats::from_records(&records).size_distribution;
        assert_eq!(dist.under_1kb, 1);
        assert_eq!(dist.kb_to_mb, 2);
        assert_eq!(dist.mb_to_gb, 2);
        assert_eq!(dist.over_1gb, 1);
    }

    #[test]
    fn test_stats_consistency() {
        let records: Vec<FileRecord> = (0..50u64)
            .map(|i| {
                let ext = [".rs", ".md", ""][(i % 3) as usize];
                record(&format!("f{}", i), ext, i * i * 997)
            })
            .collect();
        let stats = ScanStats::from_records(&records);
        assert_eq!(stats.size_distribution.total(), stats.total_files);
        assert_eq!(
            stats.by_extension.iter().map(|e| e.files).sum::<usize>(),
            stats.total_files
        );
    }

    #[test]
    fn test_format_stats() {
        let stats = ScanStats::from_records(&[record("a.txt", ".txt", 1536)]);
        let output = format_stats(&stats);
        assert!(output.starts_with("Scan Statistics\n"));
        assert!(output.contains("Total files:   1\n"));
        assert!(output.contains("Total size:    1.50 KB (1536 bytes)\n"));
        assert!(output.contains("Average size:  1.50 KB\n"));
        assert!(output.contains(&format!("  {:<16}{:>6} files\n", ".txt", 1)));
        assert!(output.contains(&format!("  {:<16}{:>6} files\n", "1KB - 1MB", 1)));
    }
}
