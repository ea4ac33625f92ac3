//! Paper output configuration from TOML (`[paper]` section)
//!
//! ```toml
//! [paper]
//! title = "Physiology Term I"
//! output = "out/physiology.pdf"
//! format = "pdf"
//!
//! [paper.layout]
//! page_size = "a4"
//! wrap_width = 80
//! ```

use crate::rendering::LayoutConfig;
use paper_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_TITLE, PaperFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base name of the output file when none is configured
pub const DEFAULT_OUTPUT_STEM: &str = "question_paper";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaperConfig {
    pub title: String,
    /// Output file; defaults to `question_paper.<ext>` in the working directory
    pub output: Option<PathBuf>,
    /// "pdf" or "text"
    pub format: String,
    pub layout: LayoutConfig,
}

impl Default for FilePaperConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            output: None,
            format: "pdf".to_string(),
            layout: LayoutConfig::default(),
        }
    }
}

impl FilePaperConfig {
    pub fn parse_format(&self) -> (PaperFormat, Vec<ConfigIssue>) {
        match self.format.parse::<PaperFormat>() {
            Ok(format) => (format, Vec::new()),
            Err(_) => (
                PaperFormat::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "paper.format".to_string(),
                        value: self.format.clone(),
                        valid_values: vec!["pdf".to_string(), "text".to_string()],
                    },
                    format!("paper.format: unknown value '{}'", self.format),
                )],
            ),
        }
    }

    pub fn check_layout(&self) -> Vec<ConfigIssue> {
        match self.layout.validate() {
            Ok(()) => Vec::new(),
            Err(e) => vec![ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "paper.layout".to_string(),
                },
                format!("paper.layout: {}", e),
            )],
        }
    }

    /// Configured output path, or the default name for `format`
    pub fn output_path(&self, format: PaperFormat) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
        })
    }
}
