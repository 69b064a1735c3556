/// Filesystem adapters: dependency manifest, license files and report output
mod manifest_resolver;
mod report_destination;
mod spdx_classifier;

pub use manifest_resolver::{ManifestResolver, DEFAULT_GIT_REMOTES, DEFAULT_MANIFEST};
pub use report_destination::ReportDestination;
pub use spdx_classifier::{SpdxTagClassifier, DEFAULT_CONFIDENCE_THRESHOLD};
