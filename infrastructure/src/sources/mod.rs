//! Question bank adapters
//!
//! Every format is a table with a header row; [`open_source`] picks the
//! adapter for a path.

mod columns;
mod csv_source;
mod json_source;
mod xlsx_source;

pub use columns::{ColumnIndex, ColumnMapping, SourceOptions};
pub use csv_source::CsvQuestionSource;
pub use json_source::JsonQuestionSource;
pub use xlsx_source::XlsxQuestionSource;

use paper_application::{QuestionSourcePort, SourceError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Storage format of a question bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankFormat {
    /// Decide from the file extension
    #[default]
    Auto,
    Csv,
    Json,
    Xlsx,
}

impl BankFormat {
    pub const VALID_VALUES: [&'static str; 4] = ["auto", "csv", "json", "xlsx"];

    /// Resolve `Auto` against a path's extension
    pub fn resolve(self, path: &Path) -> Result<BankFormat, SourceError> {
        if self != BankFormat::Auto {
            return Ok(self);
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(BankFormat::Csv),
            "json" => Ok(BankFormat::Json),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(BankFormat::Xlsx),
            "" => Err(SourceError::UnsupportedFormat(format!(
                "{} has no extension; set the bank format explicitly",
                path.display()
            ))),
            other => Err(SourceError::UnsupportedFormat(format!(
                "'.{}' ({})",
                other,
                path.display()
            ))),
        }
    }
}

impl FromStr for BankFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(BankFormat::Auto),
            "csv" => Ok(BankFormat::Csv),
            "json" => Ok(BankFormat::Json),
            "xlsx" | "xls" | "excel" | "spreadsheet" => Ok(BankFormat::Xlsx),
            other => Err(format!(
                "unknown bank format '{}', expected one of: {}",
                other,
                Self::VALID_VALUES.join(", ")
            )),
        }
    }
}

/// Build the adapter for a bank file
pub fn open_source(
    path: &Path,
    format: BankFormat,
    options: SourceOptions,
) -> Result<Arc<dyn QuestionSourcePort>, SourceError> {
    let source: Arc<dyn QuestionSourcePort> = match format.resolve(path)? {
        BankFormat::Csv => Arc::new(CsvQuestionSource::new(path, options)),
        BankFormat::Json => Arc::new(JsonQuestionSource::new(path, options)),
        BankFormat::Xlsx | BankFormat::Auto => Arc::new(XlsxQuestionSource::new(path, options)),
    };
    Ok(source)
}
