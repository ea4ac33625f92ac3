//! Paper renderer port.
//!
//! Renderers lay out a [`QuestionPaper`] as a paginated document: the title,
//! then for every question its category label and its wrapped text, breaking
//! pages when vertical space runs out. Typography is up to the adapter.

use paper_domain::{PaperFormat, QuestionPaper};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering a paper.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document error: {0}")]
    Document(String),

    #[error("Invalid layout: {0}")]
    Layout(String),
}

/// A document written by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPaper {
    pub path: PathBuf,
    pub format: PaperFormat,
    pub pages: usize,
}

/// Port for turning a selected paper into a document on disk.
pub trait PaperRendererPort: Send + Sync {
    /// Format produced by this renderer.
    fn format(&self) -> PaperFormat;

    /// Render the paper and return where it was written.
    fn render(&self, paper: &QuestionPaper) -> Result<RenderedPaper, RenderError>;
}
