//! Ordered predicate pipeline over `FileRecord`s

use std::collections::BTreeSet;
use std::fs;

use crate::metadata::FileRecord;
use crate::scan::ScanConfig;

use super::pattern::NamePattern;
use super::size::SizeFilter;

/// A single named test applied to a record.
pub trait RecordFilter {
    fn name(&self) -> &'static str;

    fn accepts(&self, record: &FileRecord) -> bool;
}

/// Extension allow list.
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    pub fn new(extensions: BTreeSet<String>) -> Self {
        Self { extensions }
    }
}

impl RecordFilter for ExtensionFilter {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn accepts(&self, record: &FileRecord) -> bool {
        self.extensions.contains(&record.extension.to_lowercase())
    }
}

/// Glob against the base name.
pub struct NameFilter {
    pattern: NamePattern,
}

impl NameFilter {
    pub fn new(pattern: NamePattern) -> Self {
        Self { pattern }
    }
}

impl RecordFilter for NameFilter {
    fn name(&self) -> &'static str {
        "name"
    }

    fn accepts(&self, record: &FileRecord) -> bool {
        self.pattern.is_match(&record.name)
    }
}

/// Size comparator.
pub struct SizeRangeFilter {
    filter: SizeFilter,
}

impl SizeRangeFilter {
    pub fn new(filter: SizeFilter) -> Self {
        Self { filter }
    }
}

impl RecordFilter for SizeRangeFilter {
    fn name(&self) -> &'static str {
        "size"
    }

    fn accepts(&self, record: &FileRecord) -> bool {
        self.filter.matches(record.size_bytes)
    }
}

/// Case-insensitive substring search in the file's text content.
///
/// Unreadable or non-UTF-8 files never match.
pub struct ContentFilter {
    needle: String,
}

impl ContentFilter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }
}

impl RecordFilter for ContentFilter {
    fn name(&self) -> &'static str {
        "content"
    }

    fn accepts(&self, record: &FileRecord) -> bool {
        match fs::read_to_string(&record.absolute_path) {
            Ok(content) => content.to_lowercase().contains(&self.needle),
            Err(e) => {
                log::debug!(
                    "skipping content search in '{}': {}",
                    record.absolute_path.display(),
                    e
                );
                false
            }
        }
    }
}

/// Conjunction of the active filters, evaluated in order.
///
/// Only configured filters are installed; the content filter always runs last.
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn RecordFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        let mut pipeline = Self::new();
        if !config.extensions.is_empty() {
            pipeline.push(ExtensionFilter::new(config.extensions.clone()));
        }
        if let Some(pattern) = &config.name_pattern {
            pipeline.push(NameFilter::new(pattern.clone()));
        }
        if let Some(size) = config.size_filter {
            pipeline.push(SizeRangeFilter::new(size));
        }
        if let Some(text) = &config.search_text {
            pipeline.push(ContentFilter::new(text));
        }
        pipeline
    }

    pub fn push(&mut self, filter: impl RecordFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Names of the installed filters in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Short-circuits on the first rejecting filter.
    pub fn accepts(&self, record: &FileRecord) -> bool {
        self.filters.iter().all(|f| {
            let ok = f.accepts(record);
            if !ok {
                log::trace!("'{}' rejected by {} filter", record.relative_path, f.name());
            }
            ok
        })
    }
}
