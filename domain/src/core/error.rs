//! Domain error types

use super::category::Category;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown question category: '{0}' (expected one of LAQ, SAQ, BAQ, MCQ)")]
    UnknownCategory(String),

    #[error("Unknown priority marker: '{0}' (expected M, D or N)")]
    UnknownPriority(String),

    #[error("Quota for {category} must not be negative (got {count})")]
    NegativeQuota { category: Category, count: i64 },

    #[error("Quota for {0} is listed more than once")]
    DuplicateQuota(Category),

    #[error("Invalid quota specification: {0}")]
    InvalidQuota(String),

    #[error("Invalid question record: {0}")]
    InvalidRecord(String),
}

impl DomainError {
    /// Check if this error comes from a malformed quota/category configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownCategory(_)
                | DomainError::NegativeQuota { .. }
                | DomainError::DuplicateQuota(_)
                | DomainError::InvalidQuota(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_quota_display() {
        let error = DomainError::NegativeQuota {
            category: Category::Saq,
            count: -2,
        };
        assert_eq!(
            error.to_string(),
            "Quota for SAQ must not be negative (got -2)"
        );
    }

    #[test]
    fn test_is_configuration_check() {
        assert!(DomainError::UnknownCategory("XYZ".to_string()).is_configuration());
        assert!(DomainError::DuplicateQuota(Category::Laq).is_configuration());
        assert!(DomainError::InvalidQuota("LAQ".to_string()).is_configuration());
        assert!(!DomainError::UnknownPriority("Q".to_string()).is_configuration());
        assert!(!DomainError::InvalidRecord("empty".to_string()).is_configuration());
    }
}
