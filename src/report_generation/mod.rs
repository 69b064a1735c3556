/// Domain layer for license report generation
///
/// Pure models and services with no knowledge of files, terminals or
/// output formats.
pub mod domain;
pub mod services;
