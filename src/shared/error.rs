use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a broken invocation apart from a
/// report that could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every row was written and the sink flushed cleanly
    Success = 0,
    /// Dependency discovery, collaborator setup, or the report sink failed
    ReportFailed = 1,
    /// Invalid command-line arguments or configuration
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ReportFailed => write!(f, "Report Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Configuration errors, reported before any dependency is resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Conflicting output formats: --{first} and --{second} cannot be used together\n\n💡 Hint: Choose at most one of --table and --md-table")]
    ConflictingFormats {
        first: &'static str,
        second: &'static str,
    },

    #[error("Invalid format: {value}\n\n💡 Hint: Use one of 'csv', 'table' or 'md-table'")]
    InvalidFormat { value: String },

    #[error("Invalid confidence threshold: {value}\n\n💡 Hint: The threshold must be between 0.0 and 1.0")]
    InvalidThreshold { value: f64 },

    #[error("Invalid config file: {path}\nDetails: {details}")]
    InvalidConfigFile { path: PathBuf, details: String },

    #[error("Invalid ignore pattern: {details}")]
    InvalidIgnorePattern { details: String },
}

/// Failures of the license classifier.
///
/// `InvalidThreshold` is raised while constructing a classifier and is fatal;
/// every other variant describes a single license file and is downgraded to a
/// diagnostic by the report assembler.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("confidence threshold {threshold} is outside 0.0..=1.0")]
    InvalidThreshold { threshold: f64 },

    #[error("failed to read license file {path}: {details}")]
    FileRead { path: PathBuf, details: String },

    #[error("no known license found in {path}")]
    Unrecognized { path: PathBuf },

    #[error("license {license} in {path} identified with confidence {confidence:.2}, below threshold {threshold:.2}")]
    BelowThreshold {
        path: PathBuf,
        license: String,
        confidence: f64,
        threshold: f64,
    },
}

/// Failures while discovering the dependency list. Always fatal.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Failed to read dependency manifest: {path}\nDetails: {details}\n\n💡 Hint: Pass the manifest location with --manifest")]
    ManifestRead { path: PathBuf, details: String },

    #[error("Failed to parse dependency manifest: {path}\nDetails: {details}")]
    ManifestParse { path: PathBuf, details: String },

    #[error("Package not found in dependency manifest: {spec}")]
    PackageNotFound { spec: String },

    #[error("Package {package} depends on {dependency}, which is missing from the dependency manifest")]
    UnknownDependency { package: String, dependency: String },

    #[error("Invalid package in dependency manifest: {details}")]
    InvalidPackage { details: String },

    #[error("Invalid ignore pattern: {details}")]
    InvalidIgnorePattern { details: String },

    #[error("Dependency resolution was cancelled")]
    Cancelled,
}

/// Failures while turning a license file path into a URL.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("no repository information for {package}")]
    NoRepository { package: String },

    #[error("none of the git remotes [{remotes}] are configured for {package}")]
    NoMatchingRemote { package: String, remotes: String },

    #[error("unsupported git remote URL: {remote}")]
    UnsupportedRemote { remote: String },

    #[error("{path} is outside of repository root {root}")]
    OutsideRepository { path: PathBuf, root: PathBuf },

    #[error("license URL resolution was cancelled")]
    Cancelled,
}

/// Per-field enrichment failure. Never aborts a report.
///
/// Not convertible into [`ReportError`].
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Error identifying license: {0}")]
    Classification(ClassificationError),

    #[error("Error discovering license URL: {0}")]
    Url(UrlError),
}

/// Failure of a report sink.
///
/// Cloneable so that a sink can remember its first error and still hand it
/// out from `error()`.
#[derive(Debug, Clone, Error)]
pub enum WriteError {
    #[error("failed to write report")]
    Io {
        #[source]
        source: Arc<io::Error>,
    },

    #[error("report writer has already been flushed")]
    AlreadyFlushed,
}

impl From<io::Error> for WriteError {
    fn from(err: io::Error) -> Self {
        WriteError::Io {
            source: Arc::new(err),
        }
    }
}

/// Fatal failures of a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Failed to write report row for {dependency}")]
    Write {
        dependency: String,
        #[source]
        source: WriteError,
    },

    #[error("Failed to flush report")]
    Flush(#[source] WriteError),
}
