//! Question bank configuration from TOML (`[bank]` section)
//!
//! ```toml
//! [bank]
//! path = "banks/physiology.xlsx"
//! sheet = "Term 1"
//! skip_invalid_rows = true
//!
//! [bank.columns]
//! competency = "Competency"
//! ```

use crate::sources::{BankFormat, ColumnMapping, SourceOptions};
use paper_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBankConfig {
    /// Bank file; the positional CLI argument takes precedence
    pub path: Option<PathBuf>,
    /// "auto", "csv", "json" or "xlsx"
    pub format: String,
    /// Worksheet to read from spreadsheet banks
    pub sheet: Option<String>,
    /// Skip malformed rows with a warning instead of failing
    pub skip_invalid_rows: bool,
    /// Header labels of the record columns
    pub columns: ColumnMapping,
}

impl Default for FileBankConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: "auto".to_string(),
            sheet: None,
            skip_invalid_rows: false,
            columns: ColumnMapping::default(),
        }
    }
}

impl FileBankConfig {
    pub fn parse_format(&self) -> (BankFormat, Vec<ConfigIssue>) {
        match self.format.parse::<BankFormat>() {
            Ok(format) => (format, Vec::new()),
            Err(_) => (
                BankFormat::Auto,
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "bank.format".to_string(),
                        value: self.format.clone(),
                        valid_values: BankFormat::VALID_VALUES.map(String::from).to_vec(),
                    },
                    format!("bank.format: unknown value '{}'", self.format),
                )],
            ),
        }
    }

    pub fn check_columns(&self) -> Vec<ConfigIssue> {
        let labels = [
            ("bank.columns.category", &self.columns.category),
            ("bank.columns.priority", &self.columns.priority),
            ("bank.columns.competency", &self.columns.competency),
            ("bank.columns.text", &self.columns.text),
        ];
        labels
            .into_iter()
            .filter(|(_, label)| label.trim().is_empty())
            .map(|(field, _)| {
                ConfigIssue::error(
                    ConfigIssueCode::EmptyColumnLabel {
                        field: field.to_string(),
                    },
                    format!("{}: column label cannot be empty", field),
                )
            })
            .collect()
    }

    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            columns: self.columns.clone(),
            skip_invalid_rows: self.skip_invalid_rows,
            sheet: self.sheet.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_config_deserialize() {
        let toml_str = r#"
[bank]
path = "banks/anatomy.csv"
format = "csv"
skip_invalid_rows = true

[bank.columns]
competency = "Competency"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bank.path, Some(PathBuf::from("banks/anatomy.csv")));
        assert_eq!(config.bank.parse_format().0, BankFormat::Csv);

        let options = config.bank.source_options();
        assert!(options.skip_invalid_rows);
        assert_eq!(options.columns.competency, "Competency");
        // Unset labels keep their defaults
        assert_eq!(options.columns.text, "Questions");
    }

    #[test]
    fn test_unknown_format_is_error() {
        let config = FileBankConfig {
            format: "docx".to_string(),
            ..FileBankConfig::default()
        };
        let (format, issues) = config.parse_format();
        assert_eq!(format, BankFormat::Auto);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_blank_column_label() {
        let mut config = FileBankConfig::default();
        config.columns.priority = "  ".to_string();
        let issues = config.check_columns();
        assert!(matches!(
            &issues[..],
            [ConfigIssue { code: ConfigIssueCode::EmptyColumnLabel { field }, .. }]
                if field == "bank.columns.priority"
        ));
    }
}
