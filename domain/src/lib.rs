//! Domain layer for exam-paper
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question bank
//!
//! - **QuestionRecord**: one validated row (category, priority, competency, text)
//! - **QuestionPool**: the ordered records loaded for one run
//! - **Filter**: drops nice-to-know questions of one category before selection
//!
//! ## Selection
//!
//! - **QuotaMap**: requested count per category, in processing order
//! - **Selector**: random draw that never repeats a competency on one paper
//! - **SelectionResult**: the chosen records plus per-category fulfillment

pub mod bank;
pub mod config;
pub mod core;
pub mod paper;
pub mod selection;

// Re-export commonly used types
pub use bank::{FilterPolicy, QuestionPool, filter};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, PaperFormat, Severity};
pub use core::{
    category::Category,
    error::DomainError,
    priority::Priority,
    question::{CompetencyId, QuestionRecord},
};
pub use paper::{DEFAULT_TITLE, QuestionPaper, Stage};
pub use selection::{CategoryFulfillment, Quota, QuotaMap, SelectionResult, Selector};
