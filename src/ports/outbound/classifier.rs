use crate::report_generation::domain::LicenseMatch;
use crate::shared::error::ClassificationError;
use std::path::Path;

/// Classifier port for identifying the license in a license file
///
/// Implementations decide what counts as a confident match. A license they
/// cannot identify, or identify below their confidence threshold, is an
/// error rather than a distinct "unknown" value.
pub trait Classifier {
    /// Identifies the license family of the file at `path`
    ///
    /// # Errors
    /// Returns a [`ClassificationError`] if the file cannot be read, holds no
    /// recognisable license, or the match is below the confidence threshold.
    fn identify(&self, path: &Path) -> Result<LicenseMatch, ClassificationError>;
}
