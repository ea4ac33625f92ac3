//! Question pool (ordered, immutable collection of records)

use crate::core::category::Category;
use crate::core::question::QuestionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered collection of question records loaded from a bank
///
/// A pool is never modified in place: filtering builds a new pool and
/// selection only borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionPool {
    records: Vec<QuestionRecord>,
}

impl QuestionPool {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Records of one category, in pool order
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &QuestionRecord> {
        self.records
            .iter()
            .filter(move |record| record.category() == category)
    }

    /// Number of records per category (categories without records are omitted)
    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category()).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<QuestionRecord> for QuestionPool {
    fn from_iter<I: IntoIterator<Item = QuestionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a QuestionPool {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
