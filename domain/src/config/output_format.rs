//! Output format value objects

use serde::{Deserialize, Serialize};

/// How the generation summary is printed to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-category counts and shortfall warnings (default)
    #[default]
    Summary,
    /// Summary followed by every selected question
    Full,
    /// JSON output
    Json,
}

/// Document format written by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperFormat {
    #[default]
    Pdf,
    /// Plain text, pages separated by form feeds
    Text,
}

impl PaperFormat {
    /// File extension used for default output paths
    pub fn extension(&self) -> &'static str {
        match self {
            PaperFormat::Pdf => "pdf",
            PaperFormat::Text => "txt",
        }
    }
}

impl std::str::FromStr for PaperFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(PaperFormat::Pdf),
            "text" | "txt" => Ok(PaperFormat::Text),
            _ => Err(format!("Unknown paper format: {}. Valid: pdf, text", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_summary() {
        assert_eq!(OutputFormat::default(), OutputFormat::Summary);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Full).unwrap();
        assert_eq!(json, "\"full\"");
        let json = serde_json::to_string(&PaperFormat::Text).unwrap();
        assert_eq!(json, "\"text\"");
    }

    #[test]
    fn test_paper_format_parse() {
        assert_eq!("PDF".parse::<PaperFormat>().unwrap(), PaperFormat::Pdf);
        assert_eq!("txt".parse::<PaperFormat>().unwrap(), PaperFormat::Text);
        assert!("docx".parse::<PaperFormat>().is_err());
        assert_eq!(PaperFormat::Text.extension(), "txt");
    }
}
