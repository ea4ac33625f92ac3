//! Generation parameters: per-run settings of the paper use case.
//!
//! [`GenerationParams`] groups everything besides the quotas that shapes a
//! single run of [`GeneratePaperUseCase`](crate::use_cases::generate_paper::GeneratePaperUseCase).

use paper_domain::{DEFAULT_TITLE, FilterPolicy};
use serde::{Deserialize, Serialize};

/// Per-run generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Title printed at the top of the paper.
    pub title: String,
    /// Eligibility filter applied before selection.
    pub filter: FilterPolicy,
    /// Fixed seed for a reproducible draw; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            filter: FilterPolicy::default(),
            seed: None,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_filter(mut self, filter: FilterPolicy) -> Self {
        self.filter = filter;
        self
    }

    pub fn without_filter(mut self) -> Self {
        self.filter.enabled = false;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
