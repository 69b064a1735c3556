pub mod dependency;
pub mod license_match;
pub mod report_row;

pub use dependency::{Dependency, SourceRepository};
pub use license_match::LicenseMatch;
pub use report_row::{ReportRow, UNKNOWN};
