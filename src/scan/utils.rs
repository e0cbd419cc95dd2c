//! Shared helpers for the scanner and the tree walker

use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

/// List a directory, sorted by file name.
///
/// Entries that fail individually are dropped; failing to open the directory is an error.
pub fn read_sorted_entries(path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}

/// Get the name of a path, defaulting to "." for root
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_sorted_entries() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "C.txt", "sub"] {
            if name == "sub" {
                fs::create_dir(dir.path().join(name)).unwrap();
            } else {
                fs::write(dir.path().join(name), "").unwrap();
            }
        }
        let names: Vec<String> = read_sorted_entries(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["C.txt", "a.txt", "b.txt", "sub"]);
    }

    #[test]
    fn test_read_sorted_entries_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(read_sorted_entries(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/b/project")), "project");
        assert_eq!(display_name(Path::new("/")), ".");
    }
}
