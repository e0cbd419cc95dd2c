//! Scan configuration: raw options in, validated `ScanConfig` out

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigErrors, RootPathError};
use crate::filter::{NamePattern, SizeFilter};

/// Unvalidated option values as handed over by the flag parser.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub path: Option<PathBuf>,
    pub depth: Option<String>,
    pub ext: Option<String>,
    pub name: Option<String>,
    pub size: Option<String>,
    pub search: Option<String>,
    pub tree: bool,
    pub stats: bool,
    pub json: bool,
    pub csv: bool,
}

/// Which renderers run after the scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputModes {
    pub tree: bool,
    pub stats: bool,
    pub json: bool,
    pub csv: bool,
}

impl OutputModes {
    /// The flat list is shown only when nothing else was asked for.
    pub fn flat_list(&self) -> bool {
        !(self.tree || self.stats || self.json || self.csv)
    }

    /// Whether any selected renderer consumes matched records.
    pub fn needs_scan(&self) -> bool {
        self.stats || self.json || self.csv || self.flat_list()
    }
}

/// Validated, immutable scan configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// `None` = unbounded. Depth 0 is the root's direct children.
    pub max_depth: Option<usize>,
    /// Lowercase, with leading dot. Empty allows every extension.
    pub extensions: BTreeSet<String>,
    pub name_pattern: Option<NamePattern>,
    pub size_filter: Option<SizeFilter>,
    pub search_text: Option<String>,
    pub outputs: OutputModes,
}

impl ScanConfig {
    /// Minimal configuration for `root`: unbounded depth, no filters, flat list output.
    ///
    /// The root is taken as-is; use `from_options` for validated input.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            extensions: BTreeSet::new(),
            name_pattern: None,
            size_filter: None,
            search_text: None,
            outputs: OutputModes::default(),
        }
    }

    /// Validate every option, collecting all errors before returning.
    pub fn from_options(options: &ScanOptions) -> Result<Self, ConfigErrors> {
        let mut errors = Vec::new();

        let max_depth = match options.depth.as_deref() {
            Some(raw) => match parse_depth(raw) {
                Ok(depth) => Some(depth),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
            None => None,
        };

        let name_pattern = match options.name.as_deref() {
            Some(glob) => NamePattern::new(glob).map_err(|e| errors.push(e)).ok(),
            None => None,
        };

        let size_filter = match options.size.as_deref() {
            Some(expr) => SizeFilter::parse(expr).map_err(|e| errors.push(e)).ok(),
            None => None,
        };

        let root = match options.path.as_deref() {
            Some(path) => resolve_root(path)
                .map_err(|e| errors.push(ConfigError::from(e)))
                .ok(),
            None => {
                errors.push(ConfigError::MissingPath);
                None
            }
        };

        let extensions = options
            .ext
            .as_deref()
            .map(parse_extensions)
            .unwrap_or_default();

        let search_text = options.search.clone().filter(|s| !s.is_empty());

        match root {
            Some(root) if errors.is_empty() => Ok(Self {
                root,
                max_depth,
                extensions,
                name_pattern,
                size_filter,
                search_text,
                outputs: OutputModes {
                    tree: options.tree,
                    stats: options.stats,
                    json: options.json,
                    csv: options.csv,
                },
            }),
            _ => Err(ConfigErrors(errors)),
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn with_name_pattern(mut self, pattern: NamePattern) -> Self {
        self.name_pattern = Some(pattern);
        self
    }

    pub fn with_size_filter(mut self, filter: SizeFilter) -> Self {
        self.size_filter = Some(filter);
        self
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search_text = (!text.is_empty()).then_some(text);
        self
    }

    /// True when `depth + 1` is still within the bound.
    pub fn can_descend(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

fn parse_depth(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidDepth(raw.to_string()))
}

/// Split a comma-separated list into normalized extensions.
pub fn parse_extensions(raw: &str) -> BTreeSet<String> {
    raw.split(',').filter_map(normalize_extension).collect()
}

/// Trim, lowercase and ensure a leading dot. Blank input yields `None`.
fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().to_lowercase();
    if ext.is_empty() || ext == "." {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext)
    } else {
        Some(format!(".{}", ext))
    }
}

/// Make `path` absolute and check that it is an existing directory.
fn resolve_root(path: &Path) -> Result<PathBuf, RootPathError> {
    let meta = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RootPathError::NotFound(path.to_path_buf()),
        _ => RootPathError::Inaccessible {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if !meta.is_dir() {
        return Err(RootPathError::NotADirectory(path.to_path_buf()));
    }
    fs::canonicalize(path).map_err(|source| RootPathError::Inaccessible {
        path: path.to_path_buf(),
        source,
    })
}
