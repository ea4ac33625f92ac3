//! Plain-text paper renderer

use super::layout::{LayoutConfig, LineStyle, Page, layout};
use super::write_document;
use paper_application::{PaperRendererPort, RenderError, RenderedPaper};
use paper_domain::{PaperFormat, QuestionPaper};
use std::path::PathBuf;

/// Indent of body lines, in characters
const TEXT_INDENT: &str = "    ";

/// Writes the laid-out paper as UTF-8 text, one form feed between pages
pub struct TextPaperRenderer {
    output: PathBuf,
    layout: LayoutConfig,
}

impl TextPaperRenderer {
    pub fn new(output: impl Into<PathBuf>, layout: LayoutConfig) -> Self {
        Self {
            output: output.into(),
            layout,
        }
    }

    pub fn to_text(pages: &[Page]) -> String {
        pages
            .iter()
            .map(|page| {
                let mut out = String::new();
                for line in &page.lines {
                    match line.style {
                        LineStyle::Title => {
                            out.push_str(&line.text);
                            out.push('\n');
                            out.push_str(&"=".repeat(line.text.chars().count()));
                            out.push_str("\n\n");
                        }
                        LineStyle::Label => {
                            out.push_str(&line.text);
                            out.push('\n');
                        }
                        LineStyle::Body => {
                            if !line.text.is_empty() {
                                out.push_str(TEXT_INDENT);
                                out.push_str(&line.text);
                            }
                            out.push('\n');
                        }
                    }
                }
                out
            })
            .collect::<Vec<_>>()
            .join("\x0c")
    }
}

impl PaperRendererPort for TextPaperRenderer {
    fn format(&self) -> PaperFormat {
        PaperFormat::Text
    }

    fn render(&self, paper: &QuestionPaper) -> Result<RenderedPaper, RenderError> {
        let pages = layout(paper, &self.layout)?;
        write_document(&self.output, Self::to_text(&pages).as_bytes())?;

        Ok(RenderedPaper {
            path: self.output.clone(),
            format: PaperFormat::Text,
            pages: pages.len(),
        })
    }
}
