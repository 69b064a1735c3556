//! license-report - license compliance reports for package dependencies
//!
//! This library resolves the transitive dependencies of one or more packages,
//! identifies the license of each one and streams a report row per dependency
//! to a pluggable writer (CSV, fixed-width table or Markdown table).
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_generation`): Report rows, dependencies and the ignore filter
//! - **Application Layer** (`application`): The report use case, DTOs and the writer factory
//! - **Ports** (`ports`): Interface definitions for resolver, classifier, writer and progress
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let classifier = SpdxTagClassifier::new(0.9)?;
//! let resolver = ManifestResolver::new(
//!     PathBuf::from("license-manifest.json"),
//!     vec!["origin".to_string()],
//! );
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(classifier, resolver, progress_reporter);
//!
//! // Execute
//! let mut writer = WriterFactory::create(
//!     ReportFormat::Table,
//!     Box::new(std::io::stdout()),
//!     &ReportRow::HEADER,
//! );
//! let request = ReportRequest::new(vec!["app".to_string()], vec![]);
//! let summary = use_case.execute(&RunContext::new(), &request, &mut writer)?;
//! eprintln!("{} rows", summary.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        ManifestResolver, ReportDestination, SpdxTagClassifier,
    };
    pub use crate::adapters::outbound::writers::{
        DelimitedWriter, MarkdownTableWriter, TableWriter,
    };
    pub use crate::application::dto::{
        Diagnostic, ReportFormat, ReportRequest, ReportSummary, RunContext, Severity,
    };
    pub use crate::application::factories::WriterFactory;
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::outbound::{Classifier, DependencyResolver, ProgressReporter, ReportWriter};
    pub use crate::report_generation::domain::{Dependency, LicenseMatch, ReportRow, UNKNOWN};
    pub use crate::report_generation::services::IgnoreFilter;
    pub use crate::shared::Result;
}
