//! Adapters - concrete implementations of the ports.

mod logging;
mod memory;

pub use logging::LogSubmissionSink;
pub use memory::InMemorySubmissionSink;
