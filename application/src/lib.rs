//! Application layer for exam-paper
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    paper_renderer::{PaperRendererPort, RenderError, RenderedPaper},
    progress::{NoProgress, ProgressNotifier},
    question_source::{QuestionSourcePort, SourceError},
};
pub use use_cases::generate_paper::{
    GeneratePaperError, GeneratePaperInput, GeneratePaperOutput, GeneratePaperUseCase,
    PreparedPaper,
};
