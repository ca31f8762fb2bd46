//! In-memory submission sink for testing.
//!
//! Captures delivered records for assertions and can be switched into a
//! failing mode to exercise delivery-error paths. Synchronous and
//! deterministic; not intended for production use.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::foundation::DomainError;
use crate::ports::{SubmissionRecord, SubmissionSink};

/// In-memory submission sink for tests.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
#[derive(Debug, Default)]
pub struct InMemorySubmissionSink {
    delivered: Mutex<Vec<SubmissionRecord>>,
    fail_next: AtomicBool,
}

impl InMemorySubmissionSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent delivery fail until cleared.
    pub fn set_failing(&self, failing: bool) {
        self.fail_next.store(failing, Ordering::SeqCst);
    }

    /// Returns all delivered records (for test assertions).
    pub fn delivered(&self) -> Vec<SubmissionRecord> {
        self.delivered
            .lock()
            .expect("InMemorySubmissionSink: lock poisoned")
            .clone()
    }

    /// Returns how many records were delivered.
    pub fn delivery_count(&self) -> usize {
        self.delivered
            .lock()
            .expect("InMemorySubmissionSink: lock poisoned")
            .len()
    }
}

impl SubmissionSink for InMemorySubmissionSink {
    fn deliver(&self, record: &SubmissionRecord) -> Result<(), DomainError> {
        if self.fail_next.load(Ordering::SeqCst) {
            return Err(DomainError::delivery("Sink configured to fail"));
        }
        self.delivered
            .lock()
            .expect("InMemorySubmissionSink: lock poisoned")
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::domain::survey::SurveyAnswers;

    fn test_record() -> SubmissionRecord {
        SubmissionRecord::new(SessionId::new(), SurveyAnswers::new())
    }

    #[test]
    fn deliver_captures_records_in_order() {
        let sink = InMemorySubmissionSink::new();
        let first = test_record();
        let second = test_record();

        sink.deliver(&first).unwrap();
        sink.deliver(&second).unwrap();

        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].session_id, first.session_id);
        assert_eq!(delivered[1].session_id, second.session_id);
    }

    #[test]
    fn failing_mode_rejects_without_capturing() {
        let sink = InMemorySubmissionSink::new();
        sink.set_failing(true);

        assert!(sink.deliver(&test_record()).is_err());
        assert_eq!(sink.delivery_count(), 0);

        sink.set_failing(false);
        assert!(sink.deliver(&test_record()).is_ok());
        assert_eq!(sink.delivery_count(), 1);
    }
}
