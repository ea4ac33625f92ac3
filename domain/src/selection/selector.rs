//! Quota-driven random selection with competency uniqueness
//!
//! Categories are processed in quota order. For each one the selector draws
//! up to the requested number of questions at random from the records whose
//! competency has not been used yet, by this category or any earlier one.
//! When the pool runs short the quota is reduced silently; the shortfall is
//! visible in [`SelectionResult::fulfillment`].

use super::quota::QuotaMap;
use super::result::SelectionResult;
use crate::bank::pool::QuestionPool;
use crate::core::question::QuestionRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Draws a paper's questions from a filtered pool
///
/// The random source is owned by the selector, so every invocation can use
/// its own generator and tests can fix the seed.
///
/// # Example
///
/// ```
/// use paper_domain::{QuestionPool, QuestionRecord, QuotaMap, Selector};
///
/// let pool: QuestionPool = vec![
///     QuestionRecord::parse("LAQ", "M", "1", "Describe the nephron.").unwrap(),
///     QuestionRecord::parse("SAQ", "M", "1", "Define GFR.").unwrap(),
/// ]
/// .into_iter()
/// .collect();
/// let quotas = QuotaMap::parse([("LAQ", 1), ("SAQ", 1)]).unwrap();
///
/// let result = Selector::seeded(7).select(&pool, &quotas);
/// assert_eq!(result.len(), 1); // the SAQ shares competency 1
/// ```
pub struct Selector<R: Rng = StdRng> {
    rng: R,
}

impl Selector<StdRng> {
    /// Selector with a freshly seeded generator from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Selector with a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Selector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Select questions for every quota entry, in quota order
    pub fn select(&mut self, pool: &QuestionPool, quotas: &QuotaMap) -> SelectionResult {
        let mut result = SelectionResult::new();

        for quota in quotas.iter() {
            let mut candidates: Vec<&QuestionRecord> = pool
                .of_category(quota.category)
                .filter(|record| !result.is_competency_used(record.competency()))
                .collect();

            let eligible = candidates
                .iter()
                .map(|record| record.competency())
                .collect::<HashSet<_>>()
                .len();
            let target = quota.count.min(eligible);

            let mut drawn = Vec::with_capacity(target);
            while drawn.len() < target {
                let index = self.rng.gen_range(0..candidates.len());
                let pick = candidates.swap_remove(index);
                candidates.retain(|other| other.competency() != pick.competency());
                drawn.push(pick.clone());
            }

            result.record_draw(quota.category, quota.count, eligible, drawn);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;
    use crate::core::question::CompetencyId;
    use std::collections::HashSet;

    fn record(category: &str, competency: &str, text: &str) -> QuestionRecord {
        QuestionRecord::parse(category, "M", competency, text).unwrap()
    }

    fn assert_unique_competencies(result: &SelectionResult) {
        let distinct: HashSet<&CompetencyId> =
            result.records().iter().map(|r| r.competency()).collect();
        assert_eq!(distinct.len(), result.len(), "duplicate competency in selection");
    }

    /// 10 LAQ records spread over 5 competencies, two records each
    fn paired_laq_pool() -> QuestionPool {
        (0..10)
            .map(|i| {
                record(
                    "LAQ",
                    &format!("C{}", i / 2),
                    &format!("Long answer question {}", i),
                )
            })
            .collect()
    }

    fn mixed_pool() -> QuestionPool {
        let mut records = Vec::new();
        for i in 0..6 {
            records.push(record("LAQ", &format!("L{}", i % 4), "laq"));
            records.push(record("SAQ", &format!("L{}", i % 3), "saq"));
            records.push(record("SAQ", &format!("S{}", i), "saq"));
            records.push(record("BAQ", &format!("S{}", i % 2), "baq"));
            records.push(record("MCQ", &format!("M{}", i), "mcq"));
        }
        QuestionPool::new(records)
    }

    // ==================== Scenarios ====================

    #[test]
    fn paired_competencies_yield_one_record_each() {
        let pool = paired_laq_pool();
        let quotas = QuotaMap::parse([("LAQ", 5)]).unwrap();

        for seed in 0..50 {
            let result = Selector::seeded(seed).select(&pool, &quotas);
            assert_eq!(result.len(), 5);
            assert_unique_competencies(&result);
            let expected: HashSet<CompetencyId> =
                (0..5).map(|i| CompetencyId::try_new(format!("C{}", i)).unwrap()).collect();
            let actual: HashSet<CompetencyId> = result.used_competencies().iter().cloned().collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn missing_category_contributes_nothing() {
        let pool = paired_laq_pool();
        let quotas = QuotaMap::parse([("MCQ", 3)]).unwrap();

        let result = Selector::seeded(1).select(&pool, &quotas);
        assert!(result.is_empty());
        assert_eq!(result.count_for(Category::Mcq), 0);
        assert_eq!(result.fulfillment()[0].eligible, 0);
        assert_eq!(result.fulfillment()[0].shortfall(), 3);
    }

    #[test]
    fn zero_quota_contributes_nothing() {
        let pool = mixed_pool();
        let quotas = QuotaMap::parse([("LAQ", 0), ("SAQ", 2)]).unwrap();

        let result = Selector::seeded(3).select(&pool, &quotas);
        assert_eq!(result.count_for(Category::Laq), 0);
        assert_eq!(result.count_for(Category::Saq), 2);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn earlier_category_blocks_shared_competency() {
        let pool = QuestionPool::new(vec![
            record("LAQ", "comp1", "Long answer"),
            record("SAQ", "comp1", "Short answer"),
        ]);
        let quotas = QuotaMap::parse([("LAQ", 1), ("SAQ", 1)]).unwrap();

        let result = Selector::seeded(0).select(&pool, &quotas);
        assert_eq!(result.len(), 1);
        assert_eq!(result.records()[0].category(), Category::Laq);
        assert_eq!(result.count_for(Category::Saq), 0);

        let saq = result.fulfillment()[1];
        assert_eq!(saq.category, Category::Saq);
        assert_eq!(saq.eligible, 0);
    }

    // ==================== Properties ====================

    #[test]
    fn selection_never_repeats_a_competency() {
        let pool = mixed_pool();
        let quotas = QuotaMap::parse([("LAQ", 3), ("SAQ", 6), ("BAQ", 2), ("MCQ", 4)]).unwrap();

        for seed in 0..200 {
            let result = Selector::seeded(seed).select(&pool, &quotas);
            assert_unique_competencies(&result);
        }
    }

    #[test]
    fn quota_is_a_ceiling_and_met_when_possible() {
        let pool = mixed_pool();
        let quotas = QuotaMap::parse([("MCQ", 4), ("BAQ", 5), ("LAQ", 2)]).unwrap();

        for seed in 0..100 {
            let result = Selector::seeded(seed).select(&pool, &quotas);
            for fulfillment in result.fulfillment() {
                let count = result.count_for(fulfillment.category);
                assert_eq!(count, fulfillment.selected);
                assert!(count <= fulfillment.requested);
                assert_eq!(count, fulfillment.requested.min(fulfillment.eligible));
            }
            // MCQ has 6 distinct competencies, BAQ only 2, LAQ 4
            assert_eq!(result.count_for(Category::Mcq), 4);
            assert_eq!(result.count_for(Category::Baq), 2);
            assert_eq!(result.count_for(Category::Laq), 2);
        }
    }

    #[test]
    fn over_request_returns_everything_available() {
        let pool = mixed_pool();
        let quotas = QuotaMap::parse([("MCQ", 100)]).unwrap();

        let result = Selector::seeded(9).select(&pool, &quotas);
        assert_eq!(result.count_for(Category::Mcq), 6);
        assert_eq!(result.fulfillment()[0].shortfall(), 94);
    }

    #[test]
    fn output_follows_quota_order() {
        let pool = mixed_pool();
        let quotas = QuotaMap::parse([("MCQ", 2), ("LAQ", 2), ("SAQ", 2)]).unwrap();

        let result = Selector::seeded(11).select(&pool, &quotas);
        let categories: Vec<Category> = result.records().iter().map(|r| r.category()).collect();
        assert_eq!(
            categories,
            vec![
                Category::Mcq,
                Category::Mcq,
                Category::Laq,
                Category::Laq,
                Category::Saq,
                Category::Saq
            ]
        );
    }

    #[test]
    fn pool_is_not_modified() {
        let pool = mixed_pool();
        let before = pool.clone();
        let quotas = QuotaMap::parse([("SAQ", 4), ("LAQ", 4)]).unwrap();

        let _ = Selector::seeded(5).select(&pool, &quotas);
        assert_eq!(pool, before);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let pool = paired_laq_pool();
        let quotas = QuotaMap::parse([("LAQ", 3)]).unwrap();

        let first = Selector::seeded(42).select(&pool, &quotas);
        let second = Selector::seeded(42).select(&pool, &quotas);
        assert_eq!(first, second);
    }

    #[test]
    fn every_candidate_can_be_drawn() {
        let pool: QuestionPool = (0..5)
            .map(|i| record("SAQ", &format!("S{}", i), &format!("q{}", i)))
            .collect();
        let quotas = QuotaMap::parse([("SAQ", 1)]).unwrap();

        let mut seen = HashSet::new();
        let mut selector = Selector::seeded(2024);
        for _ in 0..200 {
            let result = selector.select(&pool, &quotas);
            seen.insert(result.records()[0].text().to_string());
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn injected_generator_is_used() {
        let pool = paired_laq_pool();
        let quotas = QuotaMap::parse([("LAQ", 2)]).unwrap();

        let mut selector = Selector::new(StdRng::seed_from_u64(7));
        let result = selector.select(&pool, &quotas);
        assert_eq!(result, Selector::seeded(7).select(&pool, &quotas));
    }

    #[test]
    fn empty_quota_map_selects_nothing() {
        let result = Selector::from_entropy().select(&mixed_pool(), &QuotaMap::default());
        assert!(result.is_empty());
        assert!(result.fulfillment().is_empty());
    }
}
