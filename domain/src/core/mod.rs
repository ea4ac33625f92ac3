//! Core domain concepts shared across all subdomains.
//!
//! - [`category::Category`]: the closed set of question types
//! - [`priority::Priority`]: must / desirable / nice-to-know markers
//! - [`question::QuestionRecord`]: one validated row of the question bank
//! - [`error::DomainError`]: domain-level errors

pub mod category;
pub mod error;
pub mod priority;
pub mod question;
pub mod string;
