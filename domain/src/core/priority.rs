//! Priority marker value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Importance tag attached to every question (Value Object)
///
/// Banks mark questions as Must know / Desirable to know / Nice to know,
/// usually abbreviated `M`, `D` and `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Must,
    Desirable,
    Nice,
}

impl Priority {
    /// The lowest-priority marker
    pub const LOWEST: Priority = Priority::Nice;

    /// Single-letter marker as written in question banks
    pub fn marker(&self) -> &'static str {
        match self {
            Priority::Must => "M",
            Priority::Desirable => "D",
            Priority::Nice => "N",
        }
    }

    pub fn is_lowest(&self) -> bool {
        *self == Self::LOWEST
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Must => "must know",
            Priority::Desirable => "desirable to know",
            Priority::Nice => "nice to know",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let without_know = normalized
            .strip_suffix("know")
            .map(str::trim_end)
            .unwrap_or(&normalized);
        let word = without_know
            .strip_suffix(" to")
            .unwrap_or(without_know)
            .trim();

        match word {
            "m" | "must" => Ok(Priority::Must),
            "d" | "desirable" => Ok(Priority::Desirable),
            "n" | "nice" => Ok(Priority::Nice),
            _ => Err(DomainError::UnknownPriority(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markers() {
        assert_eq!("M".parse::<Priority>().unwrap(), Priority::Must);
        assert_eq!("d".parse::<Priority>().unwrap(), Priority::Desirable);
        assert_eq!(" N ".parse::<Priority>().unwrap(), Priority::Nice);
    }

    #[test]
    fn test_parse_words() {
        assert_eq!("Must know".parse::<Priority>().unwrap(), Priority::Must);
        assert_eq!(
            "Desirable to know".parse::<Priority>().unwrap(),
            Priority::Desirable
        );
        assert_eq!("nice".parse::<Priority>().unwrap(), Priority::Nice);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "X".parse::<Priority>(),
            Err(DomainError::UnknownPriority(s)) if s == "X"
        ));
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn test_lowest_is_nice() {
        assert!(Priority::Nice.is_lowest());
        assert!(!Priority::Must.is_lowest());
        assert!(!Priority::Desirable.is_lowest());
    }
}
