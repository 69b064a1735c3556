use crate::application::dto::{Diagnostic, ReportRequest, ReportSummary, RunContext, Severity};
use crate::ports::outbound::{Classifier, DependencyResolver, ProgressReporter, ReportWriter};
use crate::report_generation::domain::{Dependency, ReportRow, UNKNOWN};
use crate::shared::error::{EnrichmentError, ReportError};
use tracing::{debug, error, warn};

/// GenerateReportUseCase - assembles a license report row by row
///
/// Drives the dependency resolver and license classifier and pushes exactly
/// one row per discovered dependency into the injected [`ReportWriter`].
/// License name and URL are best-effort enrichments: when either cannot be
/// determined the field reads `"Unknown"` and a [`Diagnostic`] is recorded.
/// Writer failures, in contrast, abort the run.
///
/// # Type Parameters
/// * `C` - Classifier implementation
/// * `R` - DependencyResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<C, R, PR> {
    classifier: C,
    resolver: R,
    progress_reporter: PR,
}

impl<C, R, PR> GenerateReportUseCase<C, R, PR>
where
    C: Classifier,
    R: DependencyResolver,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(classifier: C, resolver: R, progress_reporter: PR) -> Self {
        Self {
            classifier,
            resolver,
            progress_reporter,
        }
    }

    /// Executes a report run
    ///
    /// Rows are written in the order the resolver returns dependencies. The
    /// writer is flushed exactly once, after the last row, including when
    /// there are no dependencies.
    ///
    /// # Errors
    /// - [`ReportError::Resolution`] if the dependency list cannot be produced
    ///   (nothing is written)
    /// - [`ReportError::Write`] on the first failed row; later rows are not
    ///   attempted and the writer is not flushed
    /// - [`ReportError::Flush`] if the writer reports an error after flushing
    pub fn execute<W>(
        &self,
        ctx: &RunContext,
        request: &ReportRequest,
        writer: &mut W,
    ) -> Result<ReportSummary, ReportError>
    where
        W: ReportWriter + ?Sized,
    {
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies of {} package(s)...",
            request.package_specs.len()
        ));

        let dependencies = self.resolver.libraries(
            ctx,
            &self.classifier,
            &request.ignore_patterns,
            &request.package_specs,
        )?;

        self.progress_reporter
            .report(&format!("✅ Found {} dependencies", dependencies.len()));

        let total = dependencies.len();
        let mut summary = ReportSummary::default();

        for (idx, dependency) in dependencies.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(dependency.name()));

            let row = self.resolve_row(ctx, dependency, &mut summary.diagnostics);

            if let Err(source) = writer.write(&row.fields()) {
                self.progress_reporter.report_error(&format!(
                    "❌ Report aborted after {} of {} rows",
                    summary.rows_written, total
                ));
                return Err(ReportError::Write {
                    dependency: dependency.name().to_string(),
                    source,
                });
            }
            summary.rows_written += 1;
        }

        writer.flush();
        if let Some(err) = writer.error() {
            self.progress_reporter
                .report_error("❌ Report output could not be completed");
            return Err(ReportError::Flush(err));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Report complete: {} rows, {} license errors, {} URL warnings",
            summary.rows_written,
            summary.count(Severity::Error),
            summary.count(Severity::Warning)
        ));

        Ok(summary)
    }

    /// Builds the row for one dependency, recording enrichment failures
    fn resolve_row(
        &self,
        ctx: &RunContext,
        dependency: &Dependency,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ReportRow {
        let Some(license_path) = dependency.license_path() else {
            debug!(dependency = dependency.name(), "no license file found");
            return ReportRow::unknown(dependency.name().to_string());
        };

        let license_name = match self.classifier.identify(license_path) {
            Ok(license) => {
                debug!(
                    dependency = dependency.name(),
                    license = license.name(),
                    confidence = license.confidence(),
                    "identified license"
                );
                license.into_name()
            }
            Err(err) => {
                error!(
                    "Error identifying license in {:?}: {}",
                    license_path.display().to_string(),
                    err
                );
                diagnostics.push(Diagnostic::new(
                    dependency.name(),
                    EnrichmentError::Classification(err),
                ));
                UNKNOWN.to_string()
            }
        };

        let license_url = match self.resolver.file_url(ctx, dependency, license_path) {
            Ok(url) => url,
            Err(err) => {
                warn!("Error discovering license URL: {}", err);
                diagnostics.push(Diagnostic::new(dependency.name(), EnrichmentError::Url(err)));
                UNKNOWN.to_string()
            }
        };

        ReportRow::new(dependency.name().to_string(), license_url, license_name)
    }
}
