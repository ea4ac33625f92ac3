//! Selection domain
//!
//! Turns a filtered [`QuestionPool`](crate::bank::QuestionPool) and a
//! [`QuotaMap`] into a [`SelectionResult`].
//!
//! ```text
//! for (category, requested) in quota order:
//!     eligible = pool[category] minus records whose competency is used
//!     draw min(requested, eligible) at random, one per competency
//!     mark drawn competencies as used
//! ```

pub mod quota;
pub mod result;
pub mod selector;

pub use quota::{Quota, QuotaMap};
pub use result::{CategoryFulfillment, SelectionResult};
pub use selector::Selector;
