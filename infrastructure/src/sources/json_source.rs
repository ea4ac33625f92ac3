//! JSON question bank reader
//!
//! The bank is an array of objects keyed by column label, which is what most
//! spreadsheet "export as JSON" tools produce:
//!
//! ```json
//! [
//!   {"COMP. NO": "PY1.1", "LAQ/ SAQ/ BAQ/ MCQ": "LAQ", "...": "M", "Questions": "..."}
//! ]
//! ```

use super::columns::{RawRow, RowCollector, SourceOptions, number_cell};
use paper_application::{QuestionSourcePort, SourceError};
use paper_domain::QuestionPool;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonQuestionSource {
    path: PathBuf,
    options: SourceOptions,
}

impl JsonQuestionSource {
    pub fn new(path: impl Into<PathBuf>, options: SourceOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON array of row objects
    pub fn parse_str(content: &str, options: &SourceOptions) -> Result<QuestionPool, SourceError> {
        let rows: Vec<Map<String, Value>> =
            serde_json::from_str(content).map_err(|e| SourceError::Parse(e.to_string()))?;

        if rows.is_empty() {
            return Ok(QuestionPool::default());
        }

        // Rows may omit keys, so the header is the union of all keys
        let mut headers: Vec<&str> = Vec::new();
        for key in rows.iter().flat_map(|row| row.keys()) {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
        let index = options.columns.resolve(&headers)?;
        let labels = [
            headers[index.category],
            headers[index.priority],
            headers[index.competency],
            headers[index.text],
        ];

        let mut collector = RowCollector::new(options.skip_invalid_rows);
        for (i, row) in rows.iter().enumerate() {
            let [category, priority, competency, text] =
                labels.map(|label| cell_text(row.get(label)));
            collector.push(
                i + 1,
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

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(number_cell)
            .unwrap_or_else(|| n.to_string()),
        Some(other) => other.to_string(),
    }
}

impl QuestionSourcePort for JsonQuestionSource {
    fn load(&self) -> Result<QuestionPool, SourceError> {
        debug!("Reading JSON bank {}", self.path.display());
        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse_str(&content, &self.options)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::columns::ColumnMapping;
    use paper_domain::Category;

    fn short_options() -> SourceOptions {
        SourceOptions {
            columns: ColumnMapping {
                category: "type".to_string(),
                priority: "priority".to_string(),
                competency: "competency".to_string(),
                text: "question".to_string(),
            },
            ..SourceOptions::default()
        }
    }

    #[test]
    fn test_parse_with_custom_columns() {
        let content = r#"[
            {"type": "SAQ", "priority": "D", "competency": 12, "question": "Define shock."},
            {"type": "MCQ", "priority": "M", "competency": 12.0, "question": "Pick one."},
            {"type": "LAQ", "priority": "N", "competency": "BI 3.4", "question": "Explain."}
        ]"#;

        let pool = JsonQuestionSource::parse_str(content, &short_options()).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.records()[0].competency().as_str(), "12");
        assert_eq!(pool.records()[1].competency().as_str(), "12");
        assert_eq!(pool.records()[2].category(), Category::Laq);
    }

    #[test]
    fn test_empty_array_is_empty_pool() {
        let pool = JsonQuestionSource::parse_str("[]", &short_options()).unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let content = r#"[{"type": "SAQ", "priority": "D", "question": "Define shock."}]"#;
        let err = JsonQuestionSource::parse_str(content, &short_options()).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn { column, .. } if column == "competency"));
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonQuestionSource::parse_str("{not json", &short_options()).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_missing_cell_is_invalid_row() {
        let content = r#"[
            {"type": "SAQ", "priority": "D", "competency": "1", "question": "Define shock."},
            {"type": "SAQ", "priority": "D", "question": "No competency here."}
        ]"#;
        let err = JsonQuestionSource::parse_str(content, &short_options()).unwrap_err();
        assert!(matches!(err, SourceError::InvalidRow { row: 2, .. }));
    }
}
