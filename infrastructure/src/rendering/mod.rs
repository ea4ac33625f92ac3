//! Paper renderers
//!
//! Both renderers share [`layout::layout`], so a text proof and the PDF break
//! pages at the same questions.

pub mod layout;
mod pdf;
mod text;

pub use layout::{LayoutConfig, PageSize};
pub use pdf::PdfPaperRenderer;
pub use text::TextPaperRenderer;

use paper_application::{PaperRendererPort, RenderError};
use paper_domain::PaperFormat;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Build the renderer for an output format
pub fn renderer_for(
    format: PaperFormat,
    output: impl Into<PathBuf>,
    layout: LayoutConfig,
) -> Arc<dyn PaperRendererPort> {
    match format {
        PaperFormat::Pdf => Arc::new(PdfPaperRenderer::new(output, layout)),
        PaperFormat::Text => Arc::new(TextPaperRenderer::new(output, layout)),
    }
}

/// Write a finished document, creating parent directories as needed
fn write_document(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let io_error = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, bytes).map_err(io_error)
}
