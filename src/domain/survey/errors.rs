//! Survey-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError, ViewState};

/// Errors raised by survey operations.
///
/// Note that an incomplete answer set is not an error: validity is a steady
/// boolean state that merely blocks submission (see
/// [`crate::application::SubmitOutcome`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    /// The section key is not one of the six fixed dimensions.
    #[error("Unknown survey section '{0}'")]
    UnknownSection(String),

    /// The field name is not part of the data model.
    #[error("Unknown survey field '{0}'")]
    UnknownField(String),

    /// A rating field received text, or a text field received a rating.
    #[error("Field '{field}' expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Edits are rejected once the session has been submitted.
    #[error("Session is already submitted; no further edits are possible")]
    SessionSubmitted,

    /// The requested view transition is not allowed from the current state.
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: ViewState, to: ViewState },

    /// A field value failed validation at the boundary.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The submission collaborator failed to accept the payload.
    #[error("Submission delivery failed: {0}")]
    Delivery(String),
}

impl SurveyError {
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        SurveyError::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_transition(from: ViewState, to: ViewState) -> Self {
        SurveyError::InvalidTransition { from, to }
    }

    /// Maps this error to its wire-level error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::UnknownSection(_) => ErrorCode::UnknownSection,
            SurveyError::UnknownField(_) => ErrorCode::UnknownField,
            SurveyError::TypeMismatch { .. } => ErrorCode::InvalidFormat,
            SurveyError::SessionSubmitted => ErrorCode::SessionSubmitted,
            SurveyError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            SurveyError::Validation(err) => match err {
                ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
                ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
                ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            },
            SurveyError::Delivery(_) => ErrorCode::DeliveryError,
        }
    }
}
