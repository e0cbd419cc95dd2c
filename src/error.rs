//! Error types for configuration, root validation and recoverable scan failures

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single problem found while turning raw options into a `ScanConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required <path> argument")]
    MissingPath,

    #[error("invalid --depth '{0}': expected a non-negative integer")]
    InvalidDepth(String),

    #[error(
        "invalid --size '{0}': expected <op><number>[unit] with op one of >, <, =, >=, <= and unit one of B, KB, MB, GB"
    )]
    InvalidSizeFilterFormat(String),

    #[error("invalid --name pattern '{pattern}': {source}")]
    InvalidNamePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    RootPath(#[from] RootPathError),
}

/// The scan root is missing or unusable.
#[derive(Debug, Error)]
pub enum RootPathError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot access '{}': {source}", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Every configuration error found in one pass over the options.
///
/// Never empty when returned from `ScanConfig::from_options`.
#[derive(Debug)]
pub struct ConfigErrors(pub Vec<ConfigError>);

impl ConfigErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

/// A directory below the root could not be listed. The scan carries on without it.
#[derive(Debug, Error)]
#[error("cannot read directory '{}': {source}", .path.display())]
pub struct SubtreeReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// An entry vanished or became unreadable between listing and stat.
#[derive(Debug, Error)]
#[error("cannot stat '{}': {source}", .path.display())]
pub struct StatUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
