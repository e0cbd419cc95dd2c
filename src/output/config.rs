//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Environment checks already happened when `use_color` was decided.
    pub fn color_choice(&self) -> termcolor::ColorChoice {
        if self.use_color {
            termcolor::ColorChoice::Always
        } else {
            termcolor::ColorChoice::Never
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::ColorChoice;

    #[test]
    fn test_color_choice_honors_use_color() {
        let on = OutputConfig { use_color: true };
        assert_eq!(on.color_choice(), ColorChoice::Always);
        assert_eq!(OutputConfig::default().color_choice(), ColorChoice::Never);
    }
}
