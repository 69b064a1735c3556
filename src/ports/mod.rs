/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe everything the report core needs from the outside
/// world: a license classifier, a dependency resolver, a report sink and a
/// progress channel.
pub mod outbound;
