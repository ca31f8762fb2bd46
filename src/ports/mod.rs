//! Port interfaces for external dependencies.

pub mod submission_sink;

pub use submission_sink::{SubmissionRecord, SubmissionSink};
