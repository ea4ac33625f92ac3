//! CLI command definitions

use clap::{Parser, ValueEnum};
use paper_domain::{Category, PaperFormat, QuotaMap};
use std::path::PathBuf;

/// Console output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-category counts and warnings
    Summary,
    /// Summary followed by every selected question
    Full,
    /// JSON report
    Json,
}

impl From<OutputFormat> for paper_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => paper_domain::OutputFormat::Summary,
            OutputFormat::Full => paper_domain::OutputFormat::Full,
            OutputFormat::Json => paper_domain::OutputFormat::Json,
        }
    }
}

/// Document format of the generated paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaperFormatArg {
    Pdf,
    Text,
}

impl From<PaperFormatArg> for PaperFormat {
    fn from(format: PaperFormatArg) -> Self {
        match format {
            PaperFormatArg::Pdf => PaperFormat::Pdf,
            PaperFormatArg::Text => PaperFormat::Text,
        }
    }
}

fn parse_quota(spec: &str) -> Result<(Category, i64), String> {
    QuotaMap::parse_spec(spec).map_err(|e| e.to_string())
}

/// CLI arguments for exam-paper
#[derive(Parser, Debug)]
#[command(name = "exam-paper")]
#[command(author, version, about = "Generate randomized exam question papers from a question bank")]
#[command(long_about = r#"
exam-paper draws a question paper from a question bank (CSV, JSON or a
spreadsheet) and writes it as PDF or plain text.

Each run:
1. Load:   read every question from the bank
2. Filter: drop nice-to-know long answer questions
3. Select: draw the requested number per category, never repeating a
           competency number on the same paper
4. Render: lay the paper out and write it

Categories that cannot be filled completely are reported, not fatal.

Configuration files are loaded from (in priority order):
1. EXAM_PAPER_* environment variables
2. --config <path>          Explicit config file
3. ./exam-paper.toml        Project-level config
4. ~/.config/exam-paper/config.toml   Global config

Example:
  exam-paper bank.xlsx -q LAQ=2 -q SAQ=5 -q MCQ=10
  exam-paper bank.csv -q SAQ=4 -f text -o paper.txt --seed 7
  exam-paper --dry-run --output full
"#)]
pub struct Cli {
    /// Question bank file (overrides [bank] path)
    pub bank: Option<PathBuf>,

    /// Questions per category, e.g. LAQ=2 (repeatable; replaces configured quotas)
    #[arg(short, long = "quota", value_name = "CATEGORY=COUNT", value_parser = parse_quota)]
    pub quotas: Vec<(Category, i64)>,

    /// Output file for the paper
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Paper format
    #[arg(short, long, value_enum)]
    pub format: Option<PaperFormatArg>,

    /// Title printed at the top of the paper
    #[arg(long)]
    pub title: Option<String>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep nice-to-know questions of every category
    #[arg(long)]
    pub no_filter: bool,

    /// Category whose nice-to-know questions are dropped
    #[arg(long, value_name = "CATEGORY", conflicts_with = "no_filter")]
    pub filter_category: Option<Category>,

    /// Worksheet to read from spreadsheet banks
    #[arg(long)]
    pub sheet: Option<String>,

    /// Skip malformed bank rows instead of failing
    #[arg(long)]
    pub skip_invalid_rows: bool,

    /// Select questions and print the summary without writing a paper
    #[arg(long)]
    pub dry_run: bool,

    /// Console output format
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append generation events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub generation_log: Option<PathBuf>,
}

impl Cli {
    /// Quotas given with `-q`, as `(category, count)` pairs in the given order
    pub fn quota_pairs(&self) -> Vec<(&'static str, i64)> {
        self.quotas
            .iter()
            .map(|(category, count)| (category.as_str(), *count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quotas_in_order() {
        let cli = Cli::parse_from(["exam-paper", "bank.csv", "-q", "MCQ=10", "--quota", "laq=2"]);
        assert_eq!(cli.bank, Some(PathBuf::from("bank.csv")));
        assert_eq!(cli.quota_pairs(), vec![("MCQ", 10), ("LAQ", 2)]);
    }

    #[test]
    fn test_bad_quota_is_rejected() {
        assert!(Cli::try_parse_from(["exam-paper", "-q", "VIVA=2"]).is_err());
        assert!(Cli::try_parse_from(["exam-paper", "-q", "LAQ"]).is_err());
        assert!(Cli::try_parse_from(["exam-paper", "-q", "LAQ=two"]).is_err());
    }

    #[test]
    fn test_negative_quota_reaches_validation() {
        let cli = Cli::parse_from(["exam-paper", "-q", "SAQ=-1"]);
        assert_eq!(cli.quota_pairs(), vec![("SAQ", -1)]);
    }

    #[test]
    fn test_output_and_format_flags() {
        let cli = Cli::parse_from([
            "exam-paper",
            "-f",
            "text",
            "-o",
            "out/paper.txt",
            "--output",
            "json",
            "--filter-category",
            "SAQ",
            "-vv",
        ]);
        assert_eq!(cli.format, Some(PaperFormatArg::Text));
        assert_eq!(cli.out, Some(PathBuf::from("out/paper.txt")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.filter_category, Some(Category::Saq));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_filter_conflicts_with_filter_category() {
        assert!(
            Cli::try_parse_from(["exam-paper", "--no-filter", "--filter-category", "LAQ"])
                .is_err()
        );
    }
}
