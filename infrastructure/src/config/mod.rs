//! Configuration file loading for exam-paper
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EXAM_PAPER_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./exam-paper.toml` or `./.exam-paper.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/exam-paper/config.toml`
//! 5. Fallback: `~/.config/exam-paper/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_OUTPUT_STEM, FileBankConfig, FileConfig, FileFilterConfig,
    FileLogConfig, FileOutputConfig, FilePaperConfig, FileQuotaEntry,
    FileSelectionConfig, check_quotas,
};
pub use loader::ConfigLoader;
