//! Sift - scan a directory tree, filter the files and report on the matches

pub mod error;
pub mod filter;
pub mod metadata;
pub mod output;
pub mod scan;
pub mod stats;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, ConfigErrors, RootPathError, StatUnavailable, SubtreeReadError};
pub use filter::{FilterPipeline, NamePattern, RecordFilter, SizeFilter, SizeOperator};
pub use metadata::FileRecord;
pub use output::{
    OutputConfig, ScanReport, TreeFormatter, format_bytes, print_csv, print_json, print_list,
};
pub use scan::{OutputModes, ScanConfig, ScanOptions, ScanResult, Scanner, TreeNode, TreeWalker};
pub use stats::{ScanStats, StatsCollector, print_stats};
