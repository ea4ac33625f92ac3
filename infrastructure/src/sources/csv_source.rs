//! CSV question bank reader

use super::columns::{RawRow, RowCollector, SourceOptions};
use paper_application::{QuestionSourcePort, SourceError};
use paper_domain::QuestionPool;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a bank exported as CSV (header row first; quoted fields may span
/// several lines).
pub struct CsvQuestionSource {
    path: PathBuf,
    options: SourceOptions,
}

impl CsvQuestionSource {
    pub fn new(path: impl Into<PathBuf>, options: SourceOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse CSV data from any reader
    pub fn parse_reader<R: Read>(
        reader: R,
        options: &SourceOptions,
    ) -> Result<QuestionPool, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| SourceError::Parse(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();
        let index = options.columns.resolve(&headers)?;

        let mut collector = RowCollector::new(options.skip_invalid_rows);
        for (i, row) in reader.records().enumerate() {
            let row_number = i + 2;
            let row = row.map_err(|e| SourceError::Parse(format!("row {}: {}", row_number, e)))?;
            collector.push(
                row_number,
                RawRow {
                    category: cell(&row, index.category),
                    priority: cell(&row, index.priority),
                    competency: cell(&row, index.competency),
                    text: cell(&row, index.text),
                },
            )?;
        }

        Ok(collector.finish())
    }
}

fn cell(row: &csv::StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

impl QuestionSourcePort for CsvQuestionSource {
    fn load(&self) -> Result<QuestionPool, SourceError> {
        debug!("Reading CSV bank {}", self.path.display());
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse_reader(file, &self.options)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
