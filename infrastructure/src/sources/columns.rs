//! Column mapping and row validation shared by every bank format.
//!
//! Banks are tables with a header row. [`ColumnMapping`] says which header
//! labels hold the four record fields; [`RowCollector`] turns the raw cells of
//! each data row into a validated [`QuestionRecord`].

use paper_application::SourceError;
use paper_domain::{QuestionPool, QuestionRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Header labels of the four record fields
///
/// Defaults are the headers used by the department question bank template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub category: String,
    pub priority: String,
    pub competency: String,
    pub text: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            category: "LAQ/ SAQ/ BAQ/ MCQ".to_string(),
            priority: "Must know/ Desirable to know / Nice to know (M/D/N)".to_string(),
            competency: "COMP. NO".to_string(),
            text: "Questions".to_string(),
        }
    }
}

/// Positions of the mapped columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub category: usize,
    pub priority: usize,
    pub competency: usize,
    pub text: usize,
}

impl ColumnMapping {
    /// Locate every mapped column in `headers`
    ///
    /// Labels match exactly after trimming; failing that, case-insensitively.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> Result<ColumnIndex, SourceError> {
        Ok(ColumnIndex {
            category: find_column(headers, &self.category)?,
            priority: find_column(headers, &self.priority)?,
            competency: find_column(headers, &self.competency)?,
            text: find_column(headers, &self.text)?,
        })
    }
}

fn find_column<S: AsRef<str>>(headers: &[S], label: &str) -> Result<usize, SourceError> {
    let label = label.trim();
    headers
        .iter()
        .position(|h| h.as_ref().trim() == label)
        .or_else(|| {
            headers
                .iter()
                .position(|h| h.as_ref().trim().eq_ignore_ascii_case(label))
        })
        .ok_or_else(|| SourceError::MissingColumn {
            column: label.to_string(),
            available: headers
                .iter()
                .map(|h| h.as_ref().trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
        })
}

/// Options shared by all question sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOptions {
    pub columns: ColumnMapping,
    /// Skip malformed rows with a warning instead of failing the load
    pub skip_invalid_rows: bool,
    /// Worksheet name for spreadsheet banks (first sheet when unset)
    pub sheet: Option<String>,
}

/// Raw cell values of one data row, in record field order
pub struct RawRow<'a> {
    pub category: &'a str,
    pub priority: &'a str,
    pub competency: &'a str,
    pub text: &'a str,
}

impl RawRow<'_> {
    fn is_blank(&self) -> bool {
        [self.category, self.priority, self.competency, self.text]
            .iter()
            .all(|cell| cell.trim().is_empty())
    }
}

/// Accumulates validated records row by row
pub struct RowCollector {
    skip_invalid_rows: bool,
    records: Vec<QuestionRecord>,
    skipped: usize,
}

impl RowCollector {
    pub fn new(skip_invalid_rows: bool) -> Self {
        Self {
            skip_invalid_rows,
            records: Vec::new(),
            skipped: 0,
        }
    }

    /// Validate one row; `row` is the 1-based row number shown to users
    pub fn push(&mut self, row: usize, raw: RawRow<'_>) -> Result<(), SourceError> {
        if raw.is_blank() {
            return Ok(());
        }

        match QuestionRecord::parse(raw.category, raw.priority, raw.competency, raw.text) {
            Ok(record) => {
                self.records.push(record);
                Ok(())
            }
            Err(e) if self.skip_invalid_rows => {
                warn!("Skipping row {}: {}", row, e);
                self.skipped += 1;
                Ok(())
            }
            Err(e) => Err(SourceError::InvalidRow {
                row,
                reason: e.to_string(),
            }),
        }
    }

    pub fn finish(self) -> QuestionPool {
        debug!(
            "Collected {} record(s), skipped {}",
            self.records.len(),
            self.skipped
        );
        QuestionPool::new(self.records)
    }
}

/// Render a numeric cell the way it reads in the sheet (`3.0` -> `3`)
pub fn number_cell(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
