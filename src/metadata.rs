//! Per-file metadata captured during a scan

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::StatUnavailable;

/// Normalized metadata for one regular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    pub absolute_path: PathBuf,
    /// Root-relative, `/`-separated.
    pub relative_path: String,
    pub size_bytes: u64,
    /// Lowercase with leading dot, empty when the name has none.
    pub extension: String,
    pub modified_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    /// Stat `path` and build a record relative to `root`.
    ///
    /// Symlinks are followed. Creation time falls back to modification time
    /// where the filesystem does not record it.
    pub fn from_path(path: &Path, root: &Path) -> Result<Self, StatUnavailable> {
        let unavailable = |source: io::Error| StatUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let meta = fs::metadata(path).map_err(unavailable)?;
        let modified = meta.modified().map_err(unavailable)?;
        let created = meta.created().unwrap_or(modified);

        Ok(Self {
            name: file_name(path),
            absolute_path: path.to_path_buf(),
            relative_path: relative_path(path, root),
            size_bytes: meta.len(),
            extension: extension_of(path),
            modified_at: to_utc(modified),
            created_at: to_utc(created),
        })
    }

    /// Directory levels below the root: 0 for the root's direct children.
    pub fn depth(&self) -> usize {
        self.relative_path.matches('/').count()
    }
}

fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Lowercased extension of the final path segment, with its leading dot.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// `path` relative to `root`, joined with `/`.
///
/// Only normal components are kept, so the result never climbs above the root.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_path_populates_fields() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src");
        fs::create_dir(&nested).unwrap();
        let file = nested.join("Main.RS");
        fs::write(&file, "fn main() {}").unwrap();

        let record = FileRecord::from_path(&file, dir.path()).unwrap();
        assert_eq!(record.name, "Main.RS");
        assert_eq!(record.relative_path, "src/Main.RS");
        assert_eq!(record.extension, ".rs");
        assert_eq!(record.size_bytes, 12);
        assert_eq!(record.absolute_path, file);
        assert_eq!(record.depth(), 1);
        assert!(record.created_at <= Utc::now());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.txt");
        let err = FileRecord::from_path(&missing, dir.path()).unwrap_err();
        assert_eq!(err.path, missing);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b.TXT")), ".txt");
        assert_eq!(extension_of(Path::new("archive.tar.GZ")), ".gz");
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new(".bashrc")), "");
    }

    #[test]
    fn test_relative_path() {
        let root = Path::new("/data/root");
        assert_eq!(relative_path(Path::new("/data/root/a.txt"), root), "a.txt");
        assert_eq!(relative_path(Path::new("/data/root/c/d.txt"), root), "c/d.txt");
    }
}
