/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, output streams).
pub mod classifier;
pub mod dependency_resolver;
pub mod progress_reporter;
pub mod report_writer;

pub use classifier::Classifier;
pub use dependency_resolver::DependencyResolver;
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
