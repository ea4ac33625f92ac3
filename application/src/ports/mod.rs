//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generation_logger;
pub mod paper_renderer;
pub mod progress;
pub mod question_source;
