//! Size constraint parsing: `>1MB`, `<=500`, `=2kb`

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

static SIZE_EXPR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(>=|<=|>|<|=)(\d+(?:\.\d+)?)\s*(b|kb|mb|gb)?$")
        .expect("SIZE_EXPR regex is invalid")
});

/// Comparison applied between a file size and the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeOperator {
    Gt,
    Lt,
    Eq,
    Ge,
    Le,
}

impl SizeOperator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(SizeOperator::Gt),
            "<" => Some(SizeOperator::Lt),
            "=" => Some(SizeOperator::Eq),
            ">=" => Some(SizeOperator::Ge),
            "<=" => Some(SizeOperator::Le),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SizeOperator::Gt => ">",
            SizeOperator::Lt => "<",
            SizeOperator::Eq => "=",
            SizeOperator::Ge => ">=",
            SizeOperator::Le => "<=",
        }
    }

    /// Evaluate `size <op> threshold`.
    pub fn compare(&self, size: u64, threshold: u64) -> bool {
        match self {
            SizeOperator::Gt => size > threshold,
            SizeOperator::Lt => size < threshold,
            SizeOperator::Eq => size == threshold,
            SizeOperator::Ge => size >= threshold,
            SizeOperator::Le => size <= threshold,
        }
    }
}

/// A parsed size constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFilter {
    pub operator: SizeOperator,
    pub threshold_bytes: u64,
}

impl SizeFilter {
    /// Parse `<operator><number>[<unit>]`.
    ///
    /// Units are B, KB, MB and GB (case-insensitive, 1024-based); bytes when
    /// omitted. A fractional number is floored to whole bytes after scaling.
    pub fn parse(expr: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidSizeFilterFormat(expr.to_string());

        let caps = SIZE_EXPR.captures(expr.trim()).ok_or_else(invalid)?;
        let operator = SizeOperator::from_symbol(&caps[1]).ok_or_else(invalid)?;
        let multiplier = match caps.get(3).map(|m| m.as_str().to_ascii_uppercase()) {
            None => 1,
            Some(unit) => match unit.as_str() {
                "B" => 1,
                "KB" => KB,
                "MB" => MB,
                "GB" => GB,
                _ => return Err(invalid()),
            },
        };

        let number = &caps[2];
        let threshold_bytes = if number.contains('.') {
            let value: f64 = number.parse().map_err(|_| invalid())?;
            (value * multiplier as f64).floor() as u64
        } else {
            let value: u64 = number.parse().map_err(|_| invalid())?;
            value.checked_mul(multiplier).ok_or_else(invalid)?
        };

        Ok(Self {
            operator,
            threshold_bytes,
        })
    }

    pub fn matches(&self, size: u64) -> bool {
        self.operator.compare(size, self.threshold_bytes)
    }
}

impl FromStr for SizeFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator.symbol(), self.threshold_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_unit() {
        let filter = SizeFilter::parse(">1MB").unwrap();
        assert_eq!(filter.operator, SizeOperator::Gt);
        assert_eq!(filter.threshold_bytes, 1_048_576);
    }

    #[test]
    fn test_parse_without_unit_defaults_to_bytes() {
        let filter = SizeFilter::parse("<=500").unwrap();
        assert_eq!(filter.operator, SizeOperator::Le);
        assert_eq!(filter.threshold_bytes, 500);
    }

    #[test]
    fn test_parse_all_operators() {
        assert_eq!(SizeFilter::parse(">1").unwrap().operator, SizeOperator::Gt);
        assert_eq!(SizeFilter::parse("<1").unwrap().operator, SizeOperator::Lt);
        assert_eq!(SizeFilter::parse("=1").unwrap().operator, SizeOperator::Eq);
        assert_eq!(SizeFilter::parse(">=1").unwrap().operator, SizeOperator::Ge);
        assert_eq!(SizeFilter::parse("<=1").unwrap().operator, SizeOperator::Le);
    }

    #[test]
    fn test_parse_units_case_insensitive() {
        assert_eq!(SizeFilter::parse("=2kb").unwrap().threshold_bytes, 2048);
        assert_eq!(SizeFilter::parse("=2Kb").unwrap().threshold_bytes, 2048);
        assert_eq!(SizeFilter::parse("=3b").unwrap().threshold_bytes, 3);
        assert_eq!(SizeFilter::parse(">=1gb").unwrap().threshold_bytes, GB);
        assert_eq!(SizeFilter::parse(" <10 MB ").unwrap().threshold_bytes, 10 * MB);
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(SizeFilter::parse(">1.5KB").unwrap().threshold_bytes, 1536);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["bogus", "100", "1MB", ">", ">abc", ">1TB", ">>1", "=>1", "", ">-1"] {
            assert!(
                matches!(
                    SizeFilter::parse(bad),
                    Err(ConfigError::InvalidSizeFilterFormat(_))
                ),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_matches() {
        let filter = SizeFilter::parse(">=1KB").unwrap();
        assert!(filter.matches(1024));
        assert!(filter.matches(4096));
        assert!(!filter.matches(1023));

        let filter = SizeFilter::parse("=0").unwrap();
        assert!(filter.matches(0));
        assert!(!filter.matches(1));
    }

    #[test]
    fn test_from_str_and_display() {
        let filter: SizeFilter = "<2kb".parse().unwrap();
        assert_eq!(filter.to_string(), "<2048");
    }
}
