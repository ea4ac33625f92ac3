//! Infrastructure layer for exam-paper
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: question bank readers, paper renderers,
//! the JSONL generation log and configuration file loading.

pub mod config;
pub mod logging;
pub mod rendering;
pub mod sources;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBankConfig, FileConfig, FileFilterConfig,
    FileLogConfig, FileOutputConfig, FilePaperConfig, FileQuotaEntry,
    FileSelectionConfig,
};
pub use logging::JsonlGenerationLogger;
pub use rendering::{
    LayoutConfig, PageSize, PdfPaperRenderer, TextPaperRenderer, renderer_for,
};
pub use sources::{
    BankFormat, ColumnMapping, CsvQuestionSource, JsonQuestionSource, SourceOptions,
    XlsxQuestionSource, open_source,
};
