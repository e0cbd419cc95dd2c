//! Glob-style file name matching (`*` and `?` only)

use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

/// A compiled, case-insensitive, whole-name glob.
#[derive(Debug, Clone)]
pub struct NamePattern {
    glob: String,
    regex: Regex,
}

impl NamePattern {
    pub fn new(glob: &str) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(&glob_to_regex(glob))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| ConfigError::InvalidNamePattern {
                pattern: glob.to_string(),
                source,
            })?;
        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }

    /// True if the whole name matches, not just a substring.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Translate a glob into an anchored regex source.
///
/// Every character is escaped except `*` (any run) and `?` (any single char).
fn glob_to_regex(glob: &str) -> String {
    let mut source = String::with_capacity(glob.len() * 2 + 2);
    source.push('^');
    let mut literal = [0u8; 4];
    for c in glob.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(c.encode_utf8(&mut literal))),
        }
    }
    source.push('$');
    source
}
