/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod report_format;
mod report_request;
mod report_summary;
mod run_context;

pub use report_format::ReportFormat;
pub use report_request::ReportRequest;
pub use report_summary::{Diagnostic, ReportSummary, Severity};
pub use run_context::RunContext;
