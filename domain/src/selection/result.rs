//! Selection result value objects

use crate::core::category::Category;
use crate::core::question::{CompetencyId, QuestionRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How far one quota entry was met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFulfillment {
    pub category: Category,
    /// Count asked for in the quota map
    pub requested: usize,
    /// Distinct unused competencies available when the category was drawn
    pub eligible: usize,
    /// Count actually drawn
    pub selected: usize,
}

impl CategoryFulfillment {
    pub fn is_met(&self) -> bool {
        self.selected >= self.requested
    }

    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.selected)
    }
}

/// Ordered questions chosen for one paper
///
/// Records appear in quota order; within a category the order is random.
/// No two records share a competency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    records: Vec<QuestionRecord>,
    used_competencies: BTreeSet<CompetencyId>,
    fulfillment: Vec<CategoryFulfillment>,
}

impl SelectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the draw for one category
    pub(crate) fn record_draw(
        &mut self,
        category: Category,
        requested: usize,
        eligible: usize,
        drawn: Vec<QuestionRecord>,
    ) {
        self.fulfillment.push(CategoryFulfillment {
            category,
            requested,
            eligible,
            selected: drawn.len(),
        });
        for record in drawn {
            self.used_competencies.insert(record.competency().clone());
            self.records.push(record);
        }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.records
    }

    pub fn used_competencies(&self) -> &BTreeSet<CompetencyId> {
        &self.used_competencies
    }

    pub fn is_competency_used(&self, competency: &CompetencyId) -> bool {
        self.used_competencies.contains(competency)
    }

    /// Per-category fulfillment, in quota order
    pub fn fulfillment(&self) -> &[CategoryFulfillment] {
        &self.fulfillment
    }

    /// Quota entries that could not be met in full
    pub fn shortfalls(&self) -> impl Iterator<Item = &CategoryFulfillment> {
        self.fulfillment.iter().filter(|f| !f.is_met())
    }

    pub fn count_for(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no category yielded any question
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, competency: &str) -> QuestionRecord {
        QuestionRecord::parse(category, "M", competency, "Question text").unwrap()
    }

    #[test]
    fn test_record_draw_tracks_competencies() {
        let mut result = SelectionResult::new();
        result.record_draw(Category::Laq, 2, 3, vec![record("LAQ", "1"), record("LAQ", "2")]);
        result.record_draw(Category::Saq, 1, 1, vec![record("SAQ", "3")]);

        assert_eq!(result.len(), 3);
        assert_eq!(result.count_for(Category::Laq), 2);
        assert!(result.is_competency_used(&CompetencyId::try_from("3").unwrap()));
        assert!(!result.is_competency_used(&CompetencyId::try_from("4").unwrap()));
        assert_eq!(result.shortfalls().count(), 0);
    }

    #[test]
    fn test_shortfall_reporting() {
        let mut result = SelectionResult::new();
        result.record_draw(Category::Mcq, 3, 0, vec![]);

        let shortfalls: Vec<_> = result.shortfalls().collect();
        assert_eq!(shortfalls.len(), 1);
        assert_eq!(shortfalls[0].category, Category::Mcq);
        assert_eq!(shortfalls[0].shortfall(), 3);
        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_request_is_met() {
        let fulfillment = CategoryFulfillment {
            category: Category::Baq,
            requested: 0,
            eligible: 0,
            selected: 0,
        };
        assert!(fulfillment.is_met());
        assert_eq!(fulfillment.shortfall(), 0);
    }
}
