//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the survey domain.

mod errors;
mod ids;
mod likert;
mod percentage;
mod state_machine;
mod timestamp;
mod view_state;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use likert::LikertValue;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use view_state::ViewState;
