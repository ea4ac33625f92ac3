//! Paper domain: the titled selection handed to renderers and the stages of
//! a generation run.

pub mod entities;
pub mod stage;

pub use entities::{DEFAULT_TITLE, QuestionPaper};
pub use stage::Stage;
