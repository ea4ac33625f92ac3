//! Stages of a paper generation run

use serde::{Deserialize, Serialize};

/// Stage of a paper generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Reading the question bank
    Load,
    /// Removing ineligible questions
    Filter,
    /// Drawing questions against the quotas
    Select,
    /// Writing the paper document
    Render,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Load => "load",
            Stage::Filter => "filter",
            Stage::Select => "select",
            Stage::Render => "render",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Load => "Loading question bank",
            Stage::Filter => "Filtering questions",
            Stage::Select => "Selecting questions",
            Stage::Render => "Rendering paper",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
