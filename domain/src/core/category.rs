//! Question category value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Question type classification (Value Object)
///
/// The set is closed: question banks only ever carry these four codes, and
/// quota maps are validated against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Long answer question
    Laq,
    /// Short answer question
    Saq,
    /// Brief answer question
    Baq,
    /// Multiple choice question
    Mcq,
}

impl Category {
    /// All categories in canonical paper order
    pub const ALL: [Category; 4] = [Category::Laq, Category::Saq, Category::Baq, Category::Mcq];

    /// Get the code used in question banks and on the rendered paper
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Laq => "LAQ",
            Category::Saq => "SAQ",
            Category::Baq => "BAQ",
            Category::Mcq => "MCQ",
        }
    }

    /// Get a human-readable description of this category
    pub fn description(&self) -> &'static str {
        match self {
            Category::Laq => "long answer",
            Category::Saq => "short answer",
            Category::Baq => "brief answer",
            Category::Mcq => "multiple choice",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LAQ" => Ok(Category::Laq),
            "SAQ" => Ok(Category::Saq),
            "BAQ" => Ok(Category::Baq),
            "MCQ" => Ok(Category::Mcq),
            _ => Err(DomainError::UnknownCategory(s.trim().to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
