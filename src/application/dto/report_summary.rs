use crate::shared::error::EnrichmentError;

/// Severity of a non-fatal diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A per-field enrichment failure recorded while assembling a report
///
/// Diagnostics never stop a run: the affected field is reported as
/// `"Unknown"` and the row is still written.
#[derive(Debug)]
pub struct Diagnostic {
    dependency: String,
    error: EnrichmentError,
}

impl Diagnostic {
    pub fn new(dependency: impl Into<String>, error: EnrichmentError) -> Self {
        Self {
            dependency: dependency.into(),
            error,
        }
    }

    pub fn dependency(&self) -> &str {
        &self.dependency
    }

    pub fn error(&self) -> &EnrichmentError {
        &self.error
    }

    /// Classification failures are errors, URL failures are warnings
    pub fn severity(&self) -> Severity {
        match self.error {
            EnrichmentError::Classification(_) => Severity::Error,
            EnrichmentError::Url(_) => Severity::Warning,
        }
    }
}

/// Outcome of a successful report run
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub rows_written: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ReportSummary {
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }
}
