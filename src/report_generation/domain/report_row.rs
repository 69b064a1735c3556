/// Placeholder for a license name or URL that could not be determined
pub const UNKNOWN: &str = "Unknown";

/// One line of the license report
///
/// Column order is part of the output contract: downstream tooling parses
/// reports by position, so every writer receives the fields in
/// [`ReportRow::HEADER`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    name: String,
    license_url: String,
    license_name: String,
}

impl ReportRow {
    /// Fixed column header shared by every output format
    pub const HEADER: [&'static str; 3] = ["name", "license_url", "license_name"];

    pub fn new(name: String, license_url: String, license_name: String) -> Self {
        Self {
            name,
            license_url,
            license_name,
        }
    }

    /// Row for a dependency whose license could not be determined at all
    pub fn unknown(name: String) -> Self {
        Self::new(name, UNKNOWN.to_string(), UNKNOWN.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license_url(&self) -> &str {
        &self.license_url
    }

    pub fn license_name(&self) -> &str {
        &self.license_name
    }

    /// Fields in header order
    pub fn fields(&self) -> [&str; 3] {
        [&self.name, &self.license_url, &self.license_name]
    }
}
