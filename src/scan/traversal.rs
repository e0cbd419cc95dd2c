//! Recursive, depth-bounded collection of matching files

use std::fs::DirEntry;
use std::path::Path;

use crate::error::SubtreeReadError;
use crate::filter::FilterPipeline;
use crate::metadata::FileRecord;

use super::config::ScanConfig;
use super::utils::read_sorted_entries;

/// Matched records plus the subtrees that could not be read.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub records: Vec<FileRecord>,
    pub warnings: Vec<SubtreeReadError>,
}

impl ScanResult {
    fn extend(&mut self, other: ScanResult) {
        self.records.extend(other.records);
        self.warnings.extend(other.warnings);
    }

    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|r| r.size_bytes).sum()
    }
}

/// Walks `config.root` and returns every file accepted by the filter pipeline.
///
/// Each directory is handled by its own call whose result the caller
/// concatenates, so nothing is shared between recursion levels.
pub struct Scanner<'a> {
    config: &'a ScanConfig,
    pipeline: FilterPipeline,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            pipeline: FilterPipeline::from_config(config),
        }
    }

    pub fn with_pipeline(mut self, pipeline: FilterPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn scan(&self) -> ScanResult {
        self.scan_dir(&self.config.root, 0)
    }

    fn scan_dir(&self, dir: &Path, depth: usize) -> ScanResult {
        match read_sorted_entries(dir) {
            Ok(entries) => self.scan_entries(entries, depth),
            Err(source) => {
                let warning = SubtreeReadError {
                    path: dir.to_path_buf(),
                    source,
                };
                log::warn!("{}", warning);
                ScanResult {
                    records: Vec::new(),
                    warnings: vec![warning],
                }
            }
        }
    }

    /// Process one already-listed directory at `depth`.
    fn scan_entries(&self, entries: Vec<DirEntry>, depth: usize) -> ScanResult {
        let mut result = ScanResult::default();
        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    log::debug!("skipping '{}': {}", path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                if self.config.can_descend(depth) {
                    result.extend(self.scan_dir(&path, depth + 1));
                }
                continue;
            }

            // Symlinks count only when they resolve to a regular file
            if file_type.is_symlink() {
                if !path.is_file() {
                    log::debug!("not following symlink '{}'", path.display());
                    continue;
                }
            } else if !file_type.is_file() {
                continue;
            }

            match FileRecord::from_path(&path, &self.config.root) {
                Ok(record) => {
                    if self.pipeline.accepts(&record) {
                        result.records.push(record);
                    }
                }
                Err(e) => log::debug!("{}", e),
            }
        }

        result
    }
}
