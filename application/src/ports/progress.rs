//! Progress notification port
//!
//! Defines the interface for reporting progress during paper generation.

use paper_domain::{CategoryFulfillment, Stage};

/// Callback for progress updates during paper generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: &Stage);

    /// Called when a stage completes, with a short summary
    fn on_stage_complete(&self, stage: &Stage, summary: &str);

    /// Called after each category has been drawn
    fn on_category_selected(&self, _fulfillment: &CategoryFulfillment) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &Stage) {}
    fn on_stage_complete(&self, _stage: &Stage, _summary: &str) {}
}
