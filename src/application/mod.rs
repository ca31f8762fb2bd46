//! Application layer - the session-scoped survey state controller.

mod controller;
mod edits;

pub use controller::{SubmitOutcome, SurveyController};
pub use edits::FieldEdit;
