//! Quota map: how many questions of each category a paper asks for

use crate::core::category::Category;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Requested count for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub category: Category,
    pub count: usize,
}

/// Ordered mapping from category to requested count
///
/// Entry order is the order the caller supplied, and it is the order the
/// selector processes categories in. Each category appears at most once.
///
/// # Example
///
/// ```
/// use paper_domain::selection::QuotaMap;
///
/// let quotas = QuotaMap::parse([("SAQ", 2), ("LAQ", 1)]).unwrap();
/// assert_eq!(quotas.total_requested(), 3);
/// assert!(QuotaMap::parse([("LAQ", -1)]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotaMap {
    entries: Vec<Quota>,
}

impl QuotaMap {
    /// Build from typed entries, rejecting repeated categories
    pub fn new(entries: impl IntoIterator<Item = (Category, usize)>) -> Result<Self, DomainError> {
        let mut map = Self::default();
        for (category, count) in entries {
            map.push(category, count)?;
        }
        Ok(map)
    }

    /// Build from raw (category name, signed count) pairs as they arrive from
    /// forms, config files or the command line
    pub fn parse<S: AsRef<str>>(
        entries: impl IntoIterator<Item = (S, i64)>,
    ) -> Result<Self, DomainError> {
        let mut map = Self::default();
        for (name, count) in entries {
            let category: Category = name.as_ref().parse()?;
            if count < 0 {
                return Err(DomainError::NegativeQuota { category, count });
            }
            let count = usize::try_from(count).map_err(|_| {
                DomainError::InvalidQuota(format!("count for {} is too large: {}", category, count))
            })?;
            map.push(category, count)?;
        }
        Ok(map)
    }

    /// Parse a `CATEGORY=COUNT` specification, e.g. `LAQ=2`
    pub fn parse_spec(spec: &str) -> Result<(Category, i64), DomainError> {
        let (name, count) = spec.split_once('=').ok_or_else(|| {
            DomainError::InvalidQuota(format!("'{}' is not of the form CATEGORY=COUNT", spec))
        })?;
        let category: Category = name.parse()?;
        let count: i64 = count.trim().parse().map_err(|_| {
            DomainError::InvalidQuota(format!(
                "count for {} is not a number: '{}'",
                category,
                count.trim()
            ))
        })?;
        Ok((category, count))
    }

    fn push(&mut self, category: Category, count: usize) -> Result<(), DomainError> {
        if self.get(category).is_some() {
            return Err(DomainError::DuplicateQuota(category));
        }
        self.entries.push(Quota { category, count });
        Ok(())
    }

    /// Requested count for a category, if it is part of the map
    pub fn get(&self, category: Category) -> Option<usize> {
        self.entries
            .iter()
            .find(|q| q.category == category)
            .map(|q| q.count)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quota> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_requested(&self) -> usize {
        self.entries.iter().map(|q| q.count).sum()
    }
}

impl std::fmt::Display for QuotaMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|q| format!("{}={}", q.category, q.count))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
