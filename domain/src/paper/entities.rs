//! Question paper entity

use crate::selection::result::SelectionResult;
use serde::{Deserialize, Serialize};

/// Default document title
pub const DEFAULT_TITLE: &str = "Question Paper";

/// A titled selection, ready to hand to a renderer (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPaper {
    pub title: String,
    pub selection: SelectionResult,
}

impl QuestionPaper {
    pub fn new(title: impl Into<String>, selection: SelectionResult) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };
        Self { title, selection }
    }

    pub fn question_count(&self) -> usize {
        self.selection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_falls_back_to_default() {
        let paper = QuestionPaper::new("  ", SelectionResult::new());
        assert_eq!(paper.title, DEFAULT_TITLE);
        assert_eq!(paper.question_count(), 0);
    }

    #[test]
    fn test_custom_title() {
        let paper = QuestionPaper::new("Physiology Term I", SelectionResult::new());
        assert_eq!(paper.title, "Physiology Term I");
    }
}
