/// Result of classifying a license file
///
/// The confidence is kept for diagnostics only; reports carry the name.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseMatch {
    name: String,
    confidence: f64,
}

impl LicenseMatch {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn into_name(self) -> String {
        self.name
    }
}
