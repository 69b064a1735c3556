use crate::application::dto::RunContext;
use crate::ports::outbound::Classifier;
use crate::report_generation::domain::Dependency;
use crate::shared::error::{ResolutionError, UrlError};
use std::path::Path;

/// DependencyResolver port for discovering dependencies and their license URLs
///
/// Both calls receive the run's [`RunContext`]; implementations that do
/// blocking work should give up once it is cancelled.
pub trait DependencyResolver {
    /// Produces the full, ordered dependency list for the given packages
    ///
    /// # Arguments
    /// * `ctx` - Run-wide context carrying the cancellation signal
    /// * `classifier` - Classifier the resolver may use to pick license files
    /// * `ignore_patterns` - Dependencies to leave out of the list
    /// * `package_specs` - Root packages, in the order given by the user
    ///
    /// # Errors
    /// Any failure is fatal to the report.
    fn libraries(
        &self,
        ctx: &RunContext,
        classifier: &dyn Classifier,
        ignore_patterns: &[String],
        package_specs: &[String],
    ) -> Result<Vec<Dependency>, ResolutionError>;

    /// Resolves a license file of `dependency` to a fetchable URL
    fn file_url(
        &self,
        ctx: &RunContext,
        dependency: &Dependency,
        path: &Path,
    ) -> Result<String, UrlError>;
}
