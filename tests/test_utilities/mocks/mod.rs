#![allow(dead_code)]

/// Mock implementations for testing
mod mock_classifier;
mod mock_progress_reporter;
mod mock_resolver;
mod mock_writer;

pub use mock_classifier::MockClassifier;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resolver::MockResolver;
pub use mock_writer::FailingWriter;
