//! Question bank domain: the loaded pool and the eligibility filter.

pub mod filter;
pub mod pool;

pub use filter::{FilterPolicy, filter};
pub use pool::QuestionPool;
