//! Console report settings from TOML (`[output]` section)
//!
//! Controls what is printed after a paper is generated, not the paper itself:
//!
//! ```toml
//! [output]
//! format = "full"   # summary table plus every selected question
//! color = false
//! ```
//!
//! `--output` and `--no-color` on the command line take precedence.

use paper_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report printed after the run; `None` leaves the choice to the CLI
    pub format: Option<OutputFormat>,
    /// Highlight shortfalls and headings with ANSI colors
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
