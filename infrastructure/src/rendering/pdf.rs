//! PDF paper renderer (printpdf, builtin Helvetica)

use super::layout::{LayoutConfig, layout};
use super::write_document;
use paper_application::{PaperRendererPort, RenderError, RenderedPaper};
use paper_domain::{PaperFormat, QuestionPaper};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::PathBuf;
use tracing::debug;

const LAYER_NAME: &str = "Layer 1";

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn document_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Document(e.to_string())
}

pub struct PdfPaperRenderer {
    output: PathBuf,
    layout: LayoutConfig,
}

impl PdfPaperRenderer {
    pub fn new(output: impl Into<PathBuf>, layout: LayoutConfig) -> Self {
        Self {
            output: output.into(),
            layout,
        }
    }

    /// Render to an in-memory PDF; returns the bytes and the page count
    pub fn to_bytes(&self, paper: &QuestionPaper) -> Result<(Vec<u8>, usize), RenderError> {
        let pages = layout(paper, &self.layout)?;
        let (width, height) = self.layout.page_size.dimensions_mm();

        let (doc, first_page, first_layer) =
            PdfDocument::new(paper.title.as_str(), Mm(width), Mm(height), LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(document_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(document_error)?;

        for (i, page) in pages.iter().enumerate() {
            let layer = if i == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) = doc.add_page(Mm(width), Mm(height), LAYER_NAME);
                doc.get_page(page_index).get_layer(layer_index)
            };

            for line in page.lines.iter().filter(|l| !l.text.is_empty()) {
                let font = if line.style.is_bold() { &bold } else { &regular };
                layer.use_text(
                    line.text.as_str(),
                    line.font_size,
                    pt_to_mm(line.x),
                    pt_to_mm(line.y),
                    font,
                );
            }
        }

        let bytes = doc.save_to_bytes().map_err(document_error)?;
        debug!("PDF document is {} bytes", bytes.len());
        Ok((bytes, pages.len()))
    }
}

impl PaperRendererPort for PdfPaperRenderer {
    fn format(&self) -> PaperFormat {
        PaperFormat::Pdf
    }

    fn render(&self, paper: &QuestionPaper) -> Result<RenderedPaper, RenderError> {
        let (bytes, pages) = self.to_bytes(paper)?;
        write_document(&self.output, &bytes)?;

        Ok(RenderedPaper {
            path: self.output.clone(),
            format: PaperFormat::Pdf,
            pages,
        })
    }
}
