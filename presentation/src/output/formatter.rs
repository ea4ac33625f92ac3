//! Output formatter trait

use paper_application::{PreparedPaper, RenderedPaper};
use paper_domain::OutputFormat;

/// Trait for formatting the outcome of a generation run
///
/// `rendered` is `None` for dry runs.
pub trait OutputFormatter {
    /// Per-category counts, shortfall warnings and the output file
    fn format_summary(&self, prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String;

    /// Summary followed by every selected question
    fn format_full(&self, prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String;

    /// Machine-readable report
    fn format_json(&self, prepared: &PreparedPaper, rendered: Option<&RenderedPaper>) -> String;

    fn format_as(
        &self,
        format: OutputFormat,
        prepared: &PreparedPaper,
        rendered: Option<&RenderedPaper>,
    ) -> String {
        match format {
            OutputFormat::Summary => self.format_summary(prepared, rendered),
            OutputFormat::Full => self.format_full(prepared, rendered),
            OutputFormat::Json => self.format_json(prepared, rendered),
        }
    }
}
