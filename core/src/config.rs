//! Configuration for the diff pipeline and its renderers.
//!
//! `DiffConfig` carries the knobs that change which edit script is recovered
//! from the distance matrix; `ColorMode` is handed to renderers explicitly
//! instead of living in ambient terminal constants.

use serde::{Deserialize, Serialize};

/// How the backtrace moves when the two current lines differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacktraceMode {
    /// Insert consumes only a modified line, Delete only an original line.
    #[default]
    Standard,
    /// Every step between differing lines consumes one line from each side,
    /// whichever operation is chosen. Reproduces the historical output of
    /// the tool exactly.
    Lockstep,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    pub backtrace: BacktraceMode,
}

impl DiffConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn lockstep() -> Self {
        Self {
            backtrace: BacktraceMode::Lockstep,
        }
    }

    pub fn with_backtrace(mut self, mode: BacktraceMode) -> Self {
        self.backtrace = mode;
        self
    }
}

/// When renderers should emit ANSI color sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color only when writing to a terminal and `NO_COLOR` is not set.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_colorize(self, stdout_is_terminal: bool, no_color_set: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_terminal && !no_color_set,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_standard_backtrace() {
        assert_eq!(DiffConfig::default().backtrace, BacktraceMode::Standard);
        assert_eq!(DiffConfig::standard(), DiffConfig::default());
        assert_eq!(DiffConfig::lockstep().backtrace, BacktraceMode::Lockstep);
    }

    #[test]
    fn auto_color_requires_terminal_and_no_opt_out() {
        assert!(ColorMode::Auto.should_colorize(true, false));
        assert!(!ColorMode::Auto.should_colorize(false, false));
        assert!(!ColorMode::Auto.should_colorize(true, true));
        assert!(ColorMode::Always.should_colorize(false, true));
        assert!(!ColorMode::Never.should_colorize(true, false));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: DiffConfig = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(cfg, DiffConfig::default());

        let cfg: DiffConfig =
            serde_json::from_str(r#"{"backtrace":"lockstep"}"#).expect("lockstep should parse");
        assert_eq!(cfg.backtrace, BacktraceMode::Lockstep);
    }
}
