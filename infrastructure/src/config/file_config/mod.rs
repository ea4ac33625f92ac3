//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod bank;
mod filter;
mod output;
mod paper;
mod quotas;

pub use bank::FileBankConfig;
pub use filter::FileFilterConfig;
pub use output::FileOutputConfig;
pub use paper::{DEFAULT_OUTPUT_STEM, FilePaperConfig};
pub use quotas::{FileQuotaEntry, check_quotas};

use paper_application::GenerationParams;
use paper_domain::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration problems, collected from [`FileConfig::validate`]
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("invalid configuration:\n{}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Random draw settings (`[selection]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionConfig {
    /// Fixed seed for reproducible papers
    pub seed: Option<u64>,
}

/// Structured run log settings (`[log]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file that receives one line per generation event
    pub generation_log: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question bank location and column layout
    pub bank: FileBankConfig,
    /// Requested questions per category, in draw order
    pub quotas: Vec<FileQuotaEntry>,
    /// Eligibility filter
    pub filter: FileFilterConfig,
    /// Document title, output path and layout
    pub paper: FilePaperConfig,
    /// Random draw settings
    pub selection: FileSelectionConfig,
    /// Console output settings
    pub output: FileOutputConfig,
    /// Structured run log
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks enum-like strings (bank and paper formats, filter category),
    /// every `[[quotas]]` entry, column labels and the page layout.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.bank.parse_format().1);
        issues.extend(self.bank.check_columns());
        issues.extend(check_quotas(&self.quotas));
        issues.extend(self.filter.parse_policy().1);
        issues.extend(self.paper.parse_format().1);
        issues.extend(self.paper.check_layout());

        issues
    }

    /// Split issues into warnings (returned) and errors (failing the call)
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }

    /// Configured quotas as `(category, count)` pairs, in file order
    pub fn quota_pairs(&self) -> Vec<(String, i64)> {
        self.quotas
            .iter()
            .map(|entry| (entry.category.clone(), entry.count))
            .collect()
    }

    /// Per-run parameters for the generate use case
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_title(self.paper.title.clone())
            .with_filter(self.filter.parse_policy().0)
            .with_seed(self.selection.seed)
    }
}
