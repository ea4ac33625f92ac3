//! Spreadsheet question bank reader (xlsx, xlsm, xlsb, xls, ods)

use super::columns::{RawRow, RowCollector, SourceOptions, number_cell};
use calamine::{Data, Range, Reader, open_workbook_auto};
use paper_application::{QuestionSourcePort, SourceError};
use paper_domain::QuestionPool;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the first worksheet (or the configured one) of a workbook. The
/// first non-empty row is the header.
pub struct XlsxQuestionSource {
    path: PathBuf,
    options: SourceOptions,
}

impl XlsxQuestionSource {
    pub fn new(path: impl Into<PathBuf>, options: SourceOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_range(&self) -> Result<Range<Data>, SourceError> {
        // calamine reports a missing file as a generic workbook error
        std::fs::metadata(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut workbook =
            open_workbook_auto(&self.path).map_err(|e| SourceError::Parse(e.to_string()))?;

        match &self.options.sheet {
            Some(name) => workbook
                .worksheet_range(name)
                .map_err(|e| SourceError::Parse(format!("sheet '{}': {}", name, e))),
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| SourceError::Parse("workbook has no worksheets".to_string()))?
                .map_err(|e| SourceError::Parse(e.to_string())),
        }
    }

    /// Convert a worksheet range into a pool
    pub fn parse_range(
        range: &Range<Data>,
        options: &SourceOptions,
    ) -> Result<QuestionPool, SourceError> {
        let first_row = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
        let mut rows = range.rows().enumerate();

        let Some((_, header_cells)) = rows.next() else {
            return Ok(QuestionPool::default());
        };
        let headers: Vec<String> = header_cells.iter().map(cell_text).collect();
        let index = options.columns.resolve(&headers)?;

        let mut collector = RowCollector::new(options.skip_invalid_rows);
        for (offset, cells) in rows {
            let cell = |idx: usize| cells.get(idx).map(cell_text).unwrap_or_default();
            let (category, priority, competency, text) = (
                cell(index.category),
                cell(index.priority),
                cell(index.competency),
                cell(index.text),
            );
            collector.push(
                first_row + offset,
                RawRow {
                    category: &category,
                    priority: &priority,
                    competency: &competency,
                    text: &text,
                },
            )?;
        }

        Ok(collector.finish())
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => number_cell(*f),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

impl QuestionSourcePort for XlsxQuestionSource {
    fn load(&self) -> Result<QuestionPool, SourceError> {
        debug!("Reading spreadsheet bank {}", self.path.display());
        let range = self.read_range()?;
        Self::parse_range(&range, &self.options)
    }

    fn describe(&self) -> String {
        match &self.options.sheet {
            Some(sheet) => format!("{} [{}]", self.path.display(), sheet),
            None => self.path.display().to_string(),
        }
    }
}
