//! Logging submission sink.
//!
//! Mirrors the reference behavior: a submission is acknowledged by writing
//! the full payload to the log, with no network transport involved.

use crate::domain::foundation::DomainError;
use crate::ports::{SubmissionRecord, SubmissionSink};

/// Delivers submissions by emitting them through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmissionSink;

impl LogSubmissionSink {
    /// Creates a new logging sink.
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for LogSubmissionSink {
    fn deliver(&self, record: &SubmissionRecord) -> Result<(), DomainError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| DomainError::delivery(format!("Failed to serialize submission: {}", e)))?;

        tracing::info!(
            session_id = %record.session_id,
            submitted_at = %record.submitted_at,
            payload = %payload,
            "Survey submission received"
        );
        Ok(())
    }
}
