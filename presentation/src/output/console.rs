//! Console output formatter for generation runs

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use paper_application::{PreparedPaper, RenderedPaper};
use paper_domain::CategoryFulfillment;
use paper_domain::core::string::preview;
use serde_json::json;

/// Maximum length of a question preview in the full listing
const PREVIEW_LEN: usize = 96;

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_summary(prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String {
        let paper = &prepared.paper;
        let selection = &paper.selection;
        let mut output = String::new();

        output.push_str(&Self::header(&paper.title));
        output.push('\n');

        output.push_str(&format!(
            "{} {} question(s), {} eligible after filtering\n\n",
            "Bank:".cyan().bold(),
            prepared.pool_size,
            prepared.eligible_size
        ));

        output.push_str(&format!(
            "{}\n",
            format!(
                "{:<10}{:>10}{:>10}{:>10}",
                "Category", "Requested", "Eligible", "Selected"
            )
            .bold()
        ));
        for fulfillment in selection.fulfillment() {
            output.push_str(&Self::fulfillment_row(fulfillment));
            output.push('\n');
        }

        let requested: usize = selection.fulfillment().iter().map(|f| f.requested).sum();
        output.push_str(&format!(
            "\n{} {} of {} question(s)\n",
            "Selected:".cyan().bold(),
            selection.len(),
            requested
        ));

        match rendered {
            Some(rendered) => output.push_str(&format!(
                "{} {} ({} page(s))\n",
                "Paper:".cyan().bold(),
                rendered.path.display(),
                rendered.pages
            )),
            None => output.push_str(&format!("{}\n", "Dry run: no paper written".dimmed())),
        }

        let warnings: Vec<String> = selection.shortfalls().map(Self::shortfall_warning).collect();
        if !warnings.is_empty() {
            output.push('\n');
            for warning in warnings {
                output.push_str(&format!("{} {}\n", "Warning:".yellow().bold(), warning));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_full(prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String {
        let mut output = Self::format_summary(prepared, rendered);

        output.push_str(&Self::section_header("Questions"));
        for (i, record) in prepared.paper.selection.records().iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {} {}\n",
                i + 1,
                format!("[{}]", record.category()).yellow().bold(),
                format!("{} / {}", record.competency(), record.priority()).dimmed()
            ));
            output.push_str(&Self::indent(
                &preview(record.text(), PREVIEW_LEN),
                "     ",
            ));
            output.push('\n');
        }

        output
    }

    /// Format as JSON
    pub fn format_json(prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String {
        let paper = &prepared.paper;
        let report = json!({
            "title": paper.title,
            "bank": {
                "records": prepared.pool_size,
                "eligible": prepared.eligible_size,
            },
            "categories": paper.selection.fulfillment(),
            "questions": paper.selection.records(),
            "paper": rendered.map(|r| json!({
                "path": r.path.display().to_string(),
                "format": r.format,
                "pages": r.pages,
            })),
        });
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line description of an unmet quota
    pub fn shortfall_warning(fulfillment: &CategoryFulfillment) -> String {
        format!(
            "{}: requested {}, only {} could be selected ({} eligible)",
            fulfillment.category,
            fulfillment.requested,
            fulfillment.selected,
            fulfillment.eligible
        )
    }

    fn fulfillment_row(f: &CategoryFulfillment) -> String {
        let row = format!(
            "{:<10}{:>10}{:>10}{:>10}",
            f.category.as_str(),
            f.requested,
            f.eligible,
            f.selected
        );
        if f.is_met() {
            row
        } else {
            format!("{}  {}", row.yellow(), format!("(short by {})", f.shortfall()).yellow())
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_summary(&self, prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String {
        Self::format_summary(prepared, rendered)
    }

    fn format_full(&self, prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String {
        Self::format_full(prepared, rendered)
    }

    fn format_json(&self, prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String {
        Self::format_json(prepared, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paper_domain::{
        OutputFormat, PaperFormat, QuestionPaper, QuestionPool, QuestionRecord, QuotaMap, Selector,
    };
    use std::path::PathBuf;

    fn prepared() -> PreparedPaper {
        let pool: QuestionPool = [
            ("LAQ", "1", "Describe the cardiac cycle."),
            ("SAQ", "2", "Define cardiac output."),
            ("SAQ", "3", "Define stroke volume."),
        ]
        .into_iter()
        .map(|(category, competency, text)| {
            QuestionRecord::parse(category, "M", competency, text).unwrap()
        })
        .collect();
        let quotas = QuotaMap::parse([("LAQ", 1), ("SAQ", 4)]).unwrap();
        let selection = Selector::seeded(11).select(&pool, &quotas);

        PreparedPaper {
            paper: QuestionPaper::new("Cardiology", selection),
            pool_size: 3,
            eligible_size: 3,
        }
    }

    fn rendered() -> RenderedPaper {
        RenderedPaper {
            path: PathBuf::from("cardio.pdf"),
            format: PaperFormat::Pdf,
            pages: 1,
        }
    }

    #[test]
    fn test_summary_reports_counts_and_shortfall() {
        let output = ConsoleFormatter::format_summary(&prepared(), Some(&rendered()));
        assert!(output.contains("Cardiology"));
        assert!(output.contains("3 of 5 question(s)"));
        assert!(output.contains("cardio.pdf (1 page(s))"));
        assert!(output.contains("SAQ: requested 4, only 2 could be selected (2 eligible)"));
        assert!(!output.contains("LAQ: requested"));
    }

    #[test]
    fn test_summary_for_dry_run() {
        let output = ConsoleFormatter::format_summary(&prepared(), None);
        assert!(output.contains("Dry run: no paper written"));
    }

    #[test]
    fn test_full_lists_questions() {
        let output = ConsoleFormatter.format_as(OutputFormat::Full, &prepared(), None);
        assert!(output.contains("Describe the cardiac cycle."));
        assert!(output.contains("Define stroke volume."));
        assert!(output.contains("must know"));
    }

    #[test]
    fn test_json_report() {
        let output = ConsoleFormatter::format_json(&prepared(), Some(&rendered()));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["title"], "Cardiology");
        assert_eq!(value["bank"]["records"], 3);
        assert_eq!(value["categories"][1]["category"], "SAQ");
        assert_eq!(value["categories"][1]["selected"], 2);
        assert_eq!(value["questions"].as_array().unwrap().len(), 3);
        assert_eq!(value["paper"]["format"], "pdf");
        assert_eq!(value["paper"]["pages"], 1);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
