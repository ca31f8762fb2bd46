//! Survey state controller.
//!
//! One `SurveyController` per user session. It owns the canonical
//! `SurveyAnswers`, drives the Landing -> Assessment -> Submitted flow, and
//! derives progress and validity on demand. All operations are synchronous
//! and run to completion before the next user action is processed.

use std::sync::Arc;

use crate::adapters::LogSubmissionSink;
use crate::domain::foundation::{Percentage, SessionId, StateMachine, ViewState};
use crate::domain::survey::{
    compute_progress, compute_validity, missing_requirements, ContextField, DimensionField,
    DimensionKey, FieldValue, RequiredField, SurveyAnswers, SurveyError,
};
use crate::ports::{SubmissionRecord, SubmissionSink};

use super::FieldEdit;

/// Result of a submit attempt that did not error.
///
/// An incomplete answer set is a steady state, not an error: the attempt is
/// a no-op and the UI surfaces the generic "fill required fields" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answers were delivered and the session is now Submitted.
    Submitted,
    /// Required fields are still missing; nothing changed.
    Incomplete,
}

/// Session-scoped controller for one survey run.
pub struct SurveyController {
    session_id: SessionId,
    view_state: ViewState,
    answers: SurveyAnswers,
    sink: Arc<dyn SubmissionSink>,
}

impl SurveyController {
    /// Creates a controller that logs submissions (the reference behavior).
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSubmissionSink::new()))
    }

    /// Creates a controller delivering submissions to the given sink.
    pub fn with_sink(sink: Arc<dyn SubmissionSink>) -> Self {
        let controller = Self {
            session_id: SessionId::new(),
            view_state: ViewState::default(),
            answers: SurveyAnswers::new(),
            sink,
        };
        tracing::debug!(session_id = %controller.session_id, "Survey session created");
        controller
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session identifier.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Returns the current view state.
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// Returns the current answer snapshot for rendering.
    pub fn answers(&self) -> &SurveyAnswers {
        &self.answers
    }

    /// Completion progress over the 22 tracked questions.
    pub fn progress(&self) -> Percentage {
        compute_progress(&self.answers)
    }

    /// Whether all required fields are answered and the email is plausible.
    pub fn is_valid(&self) -> bool {
        compute_validity(&self.answers)
    }

    /// Field-level diagnostics for the required fields still missing.
    pub fn missing_requirements(&self) -> Vec<RequiredField> {
        missing_requirements(&self.answers)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts the assessment from the landing page. No data change; the
    /// scroll/focus reset is a UI collaborator concern.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless currently on Landing
    pub fn start_assessment(&mut self) -> Result<(), SurveyError> {
        self.transition(ViewState::Assessment)
    }

    /// Returns to the landing page, preserving all in-progress answers.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless currently in Assessment
    pub fn go_back(&mut self) -> Result<(), SurveyError> {
        self.transition(ViewState::Landing)
    }

    /// Attempts to submit the assessment.
    ///
    /// With missing required fields this is a no-op returning
    /// [`SubmitOutcome::Incomplete`]. Otherwise the answer snapshot is
    /// handed to the submission sink exactly once and the session becomes
    /// Submitted. A failed delivery leaves the session in Assessment with
    /// all answers intact.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless currently in Assessment
    /// - `Delivery` if the sink rejects the payload
    pub fn submit(&mut self) -> Result<SubmitOutcome, SurveyError> {
        if self.view_state != ViewState::Assessment {
            return Err(SurveyError::invalid_transition(
                self.view_state,
                ViewState::Submitted,
            ));
        }

        // Safety net against stale invalid calls; the UI also disables the
        // trigger while invalid.
        if !self.is_valid() {
            tracing::warn!(
                session_id = %self.session_id,
                missing = self.missing_requirements().len(),
                "Submit attempted with incomplete answers"
            );
            return Ok(SubmitOutcome::Incomplete);
        }

        let record = SubmissionRecord::new(self.session_id, self.answers.clone());
        self.sink.deliver(&record).map_err(|err| {
            tracing::warn!(session_id = %self.session_id, error = %err, "Submission delivery failed");
            SurveyError::Delivery(err.to_string())
        })?;

        self.view_state = self
            .view_state
            .transition_to(ViewState::Submitted)
            .map_err(|_| {
                SurveyError::invalid_transition(self.view_state, ViewState::Submitted)
            })?;
        tracing::info!(session_id = %self.session_id, "Survey submitted");
        Ok(SubmitOutcome::Submitted)
    }

    /// Resets to a fresh session: new identifier, blank answers, Landing.
    /// This is the only way out of the Submitted state.
    pub fn reset(&mut self) {
        let old_session = self.session_id;
        self.session_id = SessionId::new();
        self.answers = SurveyAnswers::new();
        self.view_state = ViewState::Landing;
        tracing::debug!(
            old_session_id = %old_session,
            session_id = %self.session_id,
            "Survey session reset"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces one context field verbatim.
    ///
    /// # Errors
    ///
    /// - `SessionSubmitted` once the session is submitted
    pub fn update_context_field(
        &mut self,
        field: ContextField,
        value: impl Into<String>,
    ) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        self.answers.set_context_field(field, value);
        Ok(())
    }

    /// Replaces one rating or comments field inside a dimension.
    ///
    /// # Errors
    ///
    /// - `SessionSubmitted` once the session is submitted
    /// - `TypeMismatch` if a rating slot receives text or vice versa
    pub fn update_dimension_field(
        &mut self,
        section: DimensionKey,
        field: DimensionField,
        value: FieldValue,
    ) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        match (field, value) {
            (DimensionField::Rating(question), FieldValue::Rating(rating)) => {
                self.answers.set_rating(section, question, rating);
                Ok(())
            }
            (DimensionField::Comments, FieldValue::Text(text)) => {
                self.answers.set_comments(section, text);
                Ok(())
            }
            (DimensionField::Rating(question), value @ FieldValue::Text(_)) => Err(
                SurveyError::type_mismatch(question.as_str(), "rating", value.kind()),
            ),
            (DimensionField::Comments, value @ FieldValue::Rating(_)) => Err(
                SurveyError::type_mismatch("comments", "text", value.kind()),
            ),
        }
    }

    /// Replaces the contact email verbatim (no trimming, no case-folding).
    ///
    /// # Errors
    ///
    /// - `SessionSubmitted` once the session is submitted
    pub fn update_contact_email(&mut self, value: impl Into<String>) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        self.answers.set_email(value);
        Ok(())
    }

    /// Applies a parsed edit event from the UI boundary.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<(), SurveyError> {
        match edit {
            FieldEdit::Context { field, value } => self.update_context_field(field, value),
            FieldEdit::Dimension {
                section,
                field,
                value,
            } => self.update_dimension_field(section, field, value),
            FieldEdit::ContactEmail { value } => self.update_contact_email(value),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_editable(&self) -> Result<(), SurveyError> {
        if self.view_state == ViewState::Submitted {
            return Err(SurveyError::SessionSubmitted);
        }
        Ok(())
    }

    fn transition(&mut self, target: ViewState) -> Result<(), SurveyError> {
        let from = self.view_state;
        self.view_state = from
            .transition_to(target)
            .map_err(|_| SurveyError::invalid_transition(from, target))?;
        tracing::debug!(
            session_id = %self.session_id,
            from = %from,
            to = %target,
            "View transition"
        );
        Ok(())
    }
}

impl Default for SurveyController {
    fn default() -> Self {
        Self::new()
    }
}
