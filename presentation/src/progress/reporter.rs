//! Progress reporting for paper generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use paper_application::ProgressNotifier;
use paper_domain::{CategoryFulfillment, Stage};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per stage (drawn on stderr)
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn done_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(stage.display_name().to_string());
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, _stage: &Stage, summary: &str) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.set_style(Self::done_style());
            pb.finish_with_message(format!("{} {}", "v".green(), summary));
        }
    }

    fn on_category_selected(&self, fulfillment: &CategoryFulfillment) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!(
                "{} {}/{}",
                fulfillment.category, fulfillment.selected, fulfillment.requested
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage) {
        eprintln!("{} {}", "->".cyan(), stage.display_name().bold());
    }

    fn on_stage_complete(&self, _stage: &Stage, summary: &str) {
        eprintln!("  {} {}", "v".green(), summary);
    }

    fn on_category_selected(&self, fulfillment: &CategoryFulfillment) {
        let mark = if fulfillment.is_met() {
            "v".green()
        } else {
            "!".yellow()
        };
        eprintln!(
            "  {} {} {}/{}",
            mark, fulfillment.category, fulfillment.selected, fulfillment.requested
        );
    }
}
