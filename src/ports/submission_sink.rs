//! Submission sink port.
//!
//! The only external collaborator of the survey flow: on a valid submit, the
//! session hands the complete answer snapshot across this boundary exactly
//! once. Adapters decide what delivery means (log, queue, HTTP).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::survey::SurveyAnswers;

/// One completed survey, as handed to the submission sink.
///
/// Serde names match the wire payload, so a serialized record is exactly
/// the submission document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub session_id: SessionId,
    pub submitted_at: Timestamp,
    pub answers: SurveyAnswers,
}

impl SubmissionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(session_id: SessionId, answers: SurveyAnswers) -> Self {
        Self {
            session_id,
            submitted_at: Timestamp::now(),
            answers,
        }
    }
}

/// Receives completed surveys.
///
/// Delivery is synchronous; a returned error means nothing was accepted and
/// the caller keeps the session open for a retry.
pub trait SubmissionSink: Send + Sync {
    /// Delivers one completed survey.
    ///
    /// # Errors
    ///
    /// Returns a `DeliveryError` domain error if the record was not accepted.
    fn deliver(&self, record: &SubmissionRecord) -> Result<(), DomainError>;
}
