//! Eligibility filter applied to a pool before selection
//!
//! Under the default policy, nice-to-know long answer questions never make it
//! onto a paper. The filter is pure: it builds a new pool and keeps the
//! relative order of everything it lets through.

use super::pool::QuestionPool;
use crate::core::category::Category;
use serde::{Deserialize, Serialize};

/// Which records the filter removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPolicy {
    /// When false the pool passes through unchanged
    pub enabled: bool,
    /// Category whose lowest-priority records are excluded
    pub exclude_low_priority_for: Category,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            exclude_low_priority_for: Category::Laq,
        }
    }
}

impl FilterPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn apply(&self, pool: &QuestionPool) -> QuestionPool {
        filter(pool, self.exclude_low_priority_for, self.enabled)
    }
}

/// Remove records of `exclude_low_priority_for` carrying the lowest priority
/// marker. Everything else is kept in its original order.
pub fn filter(
    pool: &QuestionPool,
    exclude_low_priority_for: Category,
    enabled: bool,
) -> QuestionPool {
    if !enabled {
        return pool.clone();
    }

    pool.iter()
        .filter(|record| {
            !(record.category() == exclude_low_priority_for && record.priority().is_lowest())
        })
        .cloned()
        .collect()
}
