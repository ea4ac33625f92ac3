//! Category quotas from TOML (`[[quotas]]` array)
//!
//! Entries are kept in file order, which is the order categories are drawn in:
//!
//! ```toml
//! [[quotas]]
//! category = "LAQ"
//! count = 2
//!
//! [[quotas]]
//! category = "MCQ"
//! count = 10
//! ```

use paper_domain::{Category, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQuotaEntry {
    pub category: String,
    pub count: i64,
}

impl FileQuotaEntry {
    pub fn new(category: impl Into<String>, count: i64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// Report every unusable entry at once
pub fn check_quotas(entries: &[FileQuotaEntry]) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let problem = match entry.category.parse::<Category>() {
            Err(e) => Some(e.to_string()),
            Ok(_) if entry.count < 0 => Some(format!(
                "count for {} cannot be negative ({})",
                entry.category, entry.count
            )),
            Ok(category) if !seen.insert(category) => {
                Some(format!("{} is listed more than once", category))
            }
            Ok(_) => None,
        };

        if let Some(reason) = problem {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidQuota { index },
                format!("quotas[{}]: {}", index, reason),
            ));
        } else if entry.count == 0
            && let Ok(category) = entry.category.parse::<Category>()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyQuota { index },
                format!(
                    "quotas[{}]: count for {} ({}) is 0, no questions will be drawn",
                    index,
                    category,
                    category.description()
                ),
            ));
        }
    }

    issues
}
