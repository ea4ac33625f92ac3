//! Question record value objects

use super::category::Category;
use super::error::DomainError;
use super::priority::Priority;
use serde::{Deserialize, Serialize};

/// Competency number shared by topically related questions (Value Object)
///
/// Many records may carry the same competency; a single paper never does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetencyId(String);

impl CompetencyId {
    /// Try to create a competency id, returning None if blank
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompetencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CompetencyId {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        CompetencyId::try_new(s)
            .ok_or_else(|| DomainError::InvalidRecord("competency number is blank".to_string()))
    }
}

/// One row of the question bank (Value Object)
///
/// Records are validated when they are built and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    category: Category,
    priority: Priority,
    competency: CompetencyId,
    text: String,
}

impl QuestionRecord {
    pub fn new(
        category: Category,
        priority: Priority,
        competency: CompetencyId,
        text: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidRecord(format!(
                "{} question for competency {} has no text",
                category, competency
            )));
        }
        Ok(Self {
            category,
            priority,
            competency,
            text,
        })
    }

    /// Build a record from the raw cell values of a bank row
    pub fn parse(
        category: &str,
        priority: &str,
        competency: &str,
        text: &str,
    ) -> Result<Self, DomainError> {
        let category: Category = category.parse()?;
        let priority: Priority = priority.parse()?;
        let competency = CompetencyId::try_new(competency).ok_or_else(|| {
            DomainError::InvalidRecord(format!("{} question has no competency number", category))
        })?;
        Self::new(category, priority, competency, text)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn competency(&self) -> &CompetencyId {
        &self.competency
    }

    /// Get the question text (may span several lines)
    pub fn text(&self) -> &str {
        &self.text
    }
}
