//! Reply rendering settings (`[output]` section)

use mindreader_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// How replies are printed
///
/// `format` stays `None` unless a source sets it, so a later source can be
/// told apart from the built-in text default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    /// ANSI colors for text replies and REPL messages
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn resolved_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Whether ANSI styling is allowed. JSON replies are consumed by other
    /// programs and are never colored, whatever `color` says.
    pub fn use_color(&self) -> bool {
        self.color && self.resolved_format() == OutputFormat::Text
    }
}
