//! Eligibility filter configuration from TOML (`[filter]` section)

use paper_domain::{Category, ConfigIssue, ConfigIssueCode, FilterPolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFilterConfig {
    pub enabled: bool,
    /// Category whose nice-to-know questions are excluded
    pub category: String,
}

impl Default for FileFilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            category: Category::Laq.as_str().to_string(),
        }
    }
}

impl FileFilterConfig {
    pub fn parse_policy(&self) -> (FilterPolicy, Vec<ConfigIssue>) {
        match self.category.parse::<Category>() {
            Ok(category) => (
                FilterPolicy {
                    enabled: self.enabled,
                    exclude_low_priority_for: category,
                },
                Vec::new(),
            ),
            Err(_) => (
                FilterPolicy {
                    enabled: self.enabled,
                    ..FilterPolicy::default()
                },
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "filter.category".to_string(),
                        value: self.category.clone(),
                        valid_values: Category::ALL.iter().map(|c| c.to_string()).collect(),
                    },
                    format!("filter.category: unknown category '{}'", self.category),
                )],
            ),
        }
    }
}
