use license_report::prelude::*;
use std::result::Result;
use license_report::shared::error::ClassificationError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock Classifier keyed by license file path
///
/// Paths without a registered license are reported as unrecognised.
#[derive(Default)]
pub struct MockClassifier {
    pub licenses: HashMap<PathBuf, String>,
    pub below_threshold: HashMap<PathBuf, String>,
    /// Shared so a test can keep counting after the mock is moved
    pub calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, path: &str, license: &str) -> Self {
        self.licenses.insert(PathBuf::from(path), license.to_string());
        self
    }

    /// Registers a match whose confidence is too low to be accepted
    pub fn with_low_confidence(mut self, path: &str, license: &str) -> Self {
        self.below_threshold
            .insert(PathBuf::from(path), license.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for MockClassifier {
    fn identify(&self, path: &Path) -> Result<LicenseMatch, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(license) = self.licenses.get(path) {
            return Ok(LicenseMatch::new(license.clone(), 0.98));
        }
        if let Some(license) = self.below_threshold.get(path) {
            return Err(ClassificationError::BelowThreshold {
                path: path.to_path_buf(),
                license: license.clone(),
                confidence: 0.4,
                threshold: 0.9,
            });
        }
        Err(ClassificationError::Unrecognized {
            path: path.to_path_buf(),
        })
    }
}
