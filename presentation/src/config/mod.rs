//! Presentation-level configuration
//!
//! Console settings after CLI flags have been merged over the config file.

use paper_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Summary, full or JSON
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Summary,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Progress is shown unless disabled or the output is JSON
    pub fn wants_progress(&self) -> bool {
        self.show_progress && self.format != OutputFormat::Json
    }
}
