use serde::{Deserialize, Serialize};

use crate::options::HelpLayout;

/// Root settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub help: HelpSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Help output layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpSettings {
    /// Spaces before option lines and again before descriptions (default: 2).
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Maximum columns per help line (default: 80).
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

/// Logging defaults. `RUST_LOG` overrides the filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive for tracing (default: "info").
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_indent() -> usize {
    2
}

fn default_line_width() -> usize {
    80
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for HelpSettings {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            line_width: default_line_width(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl HelpSettings {
    pub fn layout(&self) -> HelpLayout {
        HelpLayout {
            indent: self.indent,
            line_width: self.line_width,
        }
    }
}
