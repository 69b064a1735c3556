/// Request parameters for a license report run
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Root packages whose dependencies are reported, in user order
    pub package_specs: Vec<String>,
    /// Dependencies to leave out of the report
    pub ignore_patterns: Vec<String>,
}

impl ReportRequest {
    pub fn new(package_specs: Vec<String>, ignore_patterns: Vec<String>) -> Self {
        Self {
            package_specs,
            ignore_patterns,
        }
    }
}
