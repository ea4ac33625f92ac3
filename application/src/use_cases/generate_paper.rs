//! Generate Paper use case
//!
//! Orchestrates one paper run: load the bank, filter it, draw questions
//! against the quotas and render the result.

use crate::config::GenerationParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::paper_renderer::{PaperRendererPort, RenderError, RenderedPaper};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::question_source::{QuestionSourcePort, SourceError};
use paper_domain::{DomainError, QuestionPaper, QuestionPool, QuotaMap, Selector, Stage};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during paper generation
#[derive(Error, Debug)]
pub enum GeneratePaperError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No questions could be selected. Please adjust your criteria.")]
    NothingSelected,
}

/// Input for the GeneratePaper use case
#[derive(Debug, Clone)]
pub struct GeneratePaperInput {
    /// Requested count per category, in processing order
    pub quotas: QuotaMap,
    /// Title, filter policy and seed
    pub params: GenerationParams,
}

impl GeneratePaperInput {
    pub fn new(quotas: QuotaMap) -> Self {
        Self {
            quotas,
            params: GenerationParams::default(),
        }
    }

    /// Build from raw `(category, count)` pairs as they come from config or CLI
    pub fn parse<S: AsRef<str>>(
        quotas: impl IntoIterator<Item = (S, i64)>,
    ) -> Result<Self, GeneratePaperError> {
        Ok(Self::new(QuotaMap::parse(quotas)?))
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// A selected paper that has not been rendered yet
#[derive(Debug, Clone)]
pub struct PreparedPaper {
    pub paper: QuestionPaper,
    /// Records in the bank before filtering
    pub pool_size: usize,
    /// Records left after filtering
    pub eligible_size: usize,
}

/// Output of a full run
#[derive(Debug, Clone)]
pub struct GeneratePaperOutput {
    pub prepared: PreparedPaper,
    pub rendered: RenderedPaper,
}

/// Use case for generating a question paper
pub struct GeneratePaperUseCase {
    source: Arc<dyn QuestionSourcePort>,
    renderer: Arc<dyn PaperRendererPort>,
    logger: Arc<dyn GenerationLogger>,
}

impl GeneratePaperUseCase {
    pub fn new(source: Arc<dyn QuestionSourcePort>, renderer: Arc<dyn PaperRendererPort>) -> Self {
        Self {
            source,
            renderer,
            logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Create with a generation logger.
    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(
        &self,
        input: GeneratePaperInput,
    ) -> Result<GeneratePaperOutput, GeneratePaperError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: GeneratePaperInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GeneratePaperOutput, GeneratePaperError> {
        let prepared = self.prepare(input, progress)?;
        let rendered = self.render(&prepared.paper, progress)?;
        Ok(GeneratePaperOutput { prepared, rendered })
    }

    /// Load, filter and select without rendering (used for dry runs)
    pub fn prepare(
        &self,
        input: GeneratePaperInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PreparedPaper, GeneratePaperError> {
        info!(
            "Generating paper from {} with quotas [{}]",
            self.source.describe(),
            input.quotas
        );

        let pool = self.stage_load(progress)?;
        let eligible = self.stage_filter(&pool, &input.params, progress);
        let paper = self.stage_select(&eligible, &input, progress);

        if paper.selection.is_empty() {
            warn!("Selection is empty for quotas [{}]", input.quotas);
            return Err(GeneratePaperError::NothingSelected);
        }

        Ok(PreparedPaper {
            paper,
            pool_size: pool.len(),
            eligible_size: eligible.len(),
        })
    }

    /// Render an already selected paper
    pub fn render(
        &self,
        paper: &QuestionPaper,
        progress: &dyn ProgressNotifier,
    ) -> Result<RenderedPaper, GeneratePaperError> {
        progress.on_stage_start(&Stage::Render);
        let rendered = self.renderer.render(paper)?;

        info!(
            "Wrote {} page(s) to {}",
            rendered.pages,
            rendered.path.display()
        );
        self.logger.log(GenerationEvent::new(
            "paper_rendered",
            json!({
                "path": rendered.path.display().to_string(),
                "format": rendered.format,
                "pages": rendered.pages,
                "questions": paper.question_count(),
            }),
        ));
        progress.on_stage_complete(
            &Stage::Render,
            &format!("{} page(s) -> {}", rendered.pages, rendered.path.display()),
        );
        Ok(rendered)
    }

    fn stage_load(&self, progress: &dyn ProgressNotifier) -> Result<QuestionPool, SourceError> {
        progress.on_stage_start(&Stage::Load);
        let pool = self.source.load()?;

        debug!("Loaded {} question(s)", pool.len());
        let by_category: serde_json::Map<String, serde_json::Value> = pool
            .count_by_category()
            .into_iter()
            .map(|(category, count)| (category.to_string(), json!(count)))
            .collect();
        self.logger.log(GenerationEvent::new(
            "pool_loaded",
            json!({
                "source": self.source.describe(),
                "records": pool.len(),
                "by_category": by_category,
            }),
        ));
        progress.on_stage_complete(&Stage::Load, &format!("{} question(s)", pool.len()));
        Ok(pool)
    }

    fn stage_filter(
        &self,
        pool: &QuestionPool,
        params: &GenerationParams,
        progress: &dyn ProgressNotifier,
    ) -> QuestionPool {
        progress.on_stage_start(&Stage::Filter);
        let eligible = params.filter.apply(pool);
        let removed = pool.len() - eligible.len();

        if params.filter.enabled {
            debug!(
                "Filter removed {} nice-to-know {} question(s)",
                removed, params.filter.exclude_low_priority_for
            );
        } else {
            debug!("Filter disabled");
        }
        self.logger.log(GenerationEvent::new(
            "pool_filtered",
            json!({
                "enabled": params.filter.enabled,
                "category": params.filter.exclude_low_priority_for,
                "removed": removed,
                "remaining": eligible.len(),
            }),
        ));
        progress.on_stage_complete(&Stage::Filter, &format!("{} removed", removed));
        eligible
    }

    fn stage_select(
        &self,
        eligible: &QuestionPool,
        input: &GeneratePaperInput,
        progress: &dyn ProgressNotifier,
    ) -> QuestionPaper {
        progress.on_stage_start(&Stage::Select);
        let mut selector = match input.params.seed {
            Some(seed) => {
                debug!("Using fixed seed {}", seed);
                Selector::seeded(seed)
            }
            None => Selector::from_entropy(),
        };
        let selection = selector.select(eligible, &input.quotas);

        for fulfillment in selection.fulfillment() {
            if !fulfillment.is_met() {
                warn!(
                    "{}: requested {}, only {} available",
                    fulfillment.category, fulfillment.requested, fulfillment.selected
                );
            }
            self.logger.log(GenerationEvent::new(
                "category_selected",
                json!({
                    "category": fulfillment.category,
                    "requested": fulfillment.requested,
                    "eligible": fulfillment.eligible,
                    "selected": fulfillment.selected,
                }),
            ));
            progress.on_category_selected(fulfillment);
        }

        progress.on_stage_complete(
            &Stage::Select,
            &format!(
                "{} of {} question(s)",
                selection.len(),
                input.quotas.total_requested()
            ),
        );
        QuestionPaper::new(input.params.title.clone(), selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paper_domain::{Category, PaperFormat, QuestionRecord};
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // ==================== Test Doubles ====================

    struct InMemorySource {
        records: Vec<QuestionRecord>,
    }

    impl QuestionSourcePort for InMemorySource {
        fn load(&self) -> Result<QuestionPool, SourceError> {
            Ok(QuestionPool::new(self.records.clone()))
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    struct FailingSource;

    impl QuestionSourcePort for FailingSource {
        fn load(&self) -> Result<QuestionPool, SourceError> {
            Err(SourceError::InvalidRow {
                row: 3,
                reason: "unknown category".to_string(),
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        papers: Mutex<Vec<QuestionPaper>>,
    }

    impl PaperRendererPort for RecordingRenderer {
        fn format(&self) -> PaperFormat {
            PaperFormat::Text
        }

        fn render(&self, paper: &QuestionPaper) -> Result<RenderedPaper, RenderError> {
            self.papers.lock().unwrap().push(paper.clone());
            Ok(RenderedPaper {
                path: PathBuf::from("paper.txt"),
                format: PaperFormat::Text,
                pages: 1,
            })
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl GenerationLogger for RecordingLogger {
        fn log(&self, event: GenerationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    // ==================== Helpers ====================

    fn record(category: &str, priority: &str, competency: &str) -> QuestionRecord {
        QuestionRecord::parse(
            category,
            priority,
            competency,
            &format!("{} question on {}", category, competency),
        )
        .unwrap()
    }

    fn bank() -> Vec<QuestionRecord> {
        vec![
            record("LAQ", "N", "1"),
            record("LAQ", "N", "2"),
            record("LAQ", "M", "3"),
            record("SAQ", "M", "3"),
            record("SAQ", "D", "4"),
            record("SAQ", "N", "5"),
            record("MCQ", "M", "6"),
        ]
    }

    fn use_case(renderer: Arc<RecordingRenderer>) -> GeneratePaperUseCase {
        GeneratePaperUseCase::new(Arc::new(InMemorySource { records: bank() }), renderer)
    }

    // ==================== Tests ====================

    #[test]
    fn test_full_run_filters_selects_and_renders() {
        let renderer = Arc::new(RecordingRenderer::default());
        let quotas = QuotaMap::parse([("LAQ", 3), ("SAQ", 3)]).unwrap();
        let input = GeneratePaperInput::new(quotas)
            .with_params(GenerationParams::default().with_seed(Some(1)));

        let output = use_case(renderer.clone()).execute(input).unwrap();

        // Only one LAQ survives the filter; its competency blocks SAQ#3
        let paper = &output.prepared.paper;
        assert_eq!(output.prepared.pool_size, 7);
        assert_eq!(output.prepared.eligible_size, 5);
        assert_eq!(paper.selection.count_for(Category::Laq), 1);
        assert_eq!(paper.selection.count_for(Category::Saq), 2);

        let competencies: HashSet<_> = paper
            .selection
            .records()
            .iter()
            .map(|r| r.competency().as_str())
            .collect();
        assert_eq!(competencies, HashSet::from(["3", "4", "5"]));

        assert_eq!(renderer.papers.lock().unwrap().len(), 1);
        assert_eq!(output.rendered.pages, 1);
    }

    #[test]
    fn test_disabled_filter_keeps_nice_to_know() {
        let renderer = Arc::new(RecordingRenderer::default());
        let quotas = QuotaMap::parse([("LAQ", 3)]).unwrap();
        let input = GeneratePaperInput::new(quotas)
            .with_params(GenerationParams::default().without_filter());

        let output = use_case(renderer).execute(input).unwrap();
        assert_eq!(output.prepared.eligible_size, 7);
        assert_eq!(output.prepared.paper.selection.count_for(Category::Laq), 3);
    }

    #[test]
    fn test_empty_selection_is_reported_and_not_rendered() {
        let renderer = Arc::new(RecordingRenderer::default());
        let quotas = QuotaMap::parse([("BAQ", 2), ("LAQ", 0)]).unwrap();

        let err = use_case(renderer.clone())
            .execute(GeneratePaperInput::new(quotas))
            .unwrap_err();
        assert!(matches!(err, GeneratePaperError::NothingSelected));
        assert!(renderer.papers.lock().unwrap().is_empty());
    }

    #[test]
    fn test_source_error_propagates() {
        let renderer = Arc::new(RecordingRenderer::default());
        let use_case = GeneratePaperUseCase::new(Arc::new(FailingSource), renderer);
        let quotas = QuotaMap::parse([("LAQ", 1)]).unwrap();

        let err = use_case.execute(GeneratePaperInput::new(quotas)).unwrap_err();
        assert!(matches!(
            err,
            GeneratePaperError::Source(SourceError::InvalidRow { row: 3, .. })
        ));
        assert_eq!(err.to_string(), "Row 3: unknown category");
    }

    #[test]
    fn test_title_is_passed_to_renderer() {
        let renderer = Arc::new(RecordingRenderer::default());
        let quotas = QuotaMap::parse([("MCQ", 1)]).unwrap();
        let input = GeneratePaperInput::new(quotas)
            .with_params(GenerationParams::default().with_title("Pharmacology Unit Test"));

        use_case(renderer.clone()).execute(input).unwrap();
        let papers = renderer.papers.lock().unwrap();
        assert_eq!(papers[0].title, "Pharmacology Unit Test");
    }

    #[test]
    fn test_prepare_does_not_render() {
        let renderer = Arc::new(RecordingRenderer::default());
        let quotas = QuotaMap::parse([("MCQ", 1)]).unwrap();

        let prepared = use_case(renderer.clone())
            .prepare(GeneratePaperInput::new(quotas), &NoProgress)
            .unwrap();
        assert_eq!(prepared.paper.question_count(), 1);
        assert!(renderer.papers.lock().unwrap().is_empty());
    }

    #[test]
    fn test_events_are_logged_in_order() {
        let renderer = Arc::new(RecordingRenderer::default());
        let logger = Arc::new(RecordingLogger::default());
        let quotas = QuotaMap::parse([("SAQ", 1), ("MCQ", 1)]).unwrap();

        use_case(renderer)
            .with_logger(logger.clone())
            .execute(GeneratePaperInput::new(quotas))
            .unwrap();

        let events = logger.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "pool_loaded",
                "pool_filtered",
                "category_selected",
                "category_selected",
                "paper_rendered"
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = GeneratePaperInput::parse([("LAQ", 1), ("VIVA", 2)]).unwrap_err();
        assert!(matches!(
            err,
            GeneratePaperError::Domain(DomainError::UnknownCategory(ref c)) if c == "VIVA"
        ));
    }

    #[test]
    fn test_same_seed_same_paper() {
        let quotas = QuotaMap::parse([("SAQ", 2), ("LAQ", 1)]).unwrap();
        let params = GenerationParams::default().with_seed(Some(99));

        let first = use_case(Arc::new(RecordingRenderer::default()))
            .prepare(
                GeneratePaperInput::new(quotas.clone()).with_params(params.clone()),
                &NoProgress,
            )
            .unwrap();
        let second = use_case(Arc::new(RecordingRenderer::default()))
            .prepare(
                GeneratePaperInput::new(quotas).with_params(params),
                &NoProgress,
            )
            .unwrap();
        assert_eq!(first.paper, second.paper);
    }
}
