//! Application-level configuration.
//!
//! - [`GenerationParams`]: title, filter policy and seed for one paper run

pub mod generation_params;

pub use generation_params::GenerationParams;
