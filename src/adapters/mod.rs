/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the manifest
/// resolver, the SPDX classifier, the report writers and console feedback.
pub mod outbound;
