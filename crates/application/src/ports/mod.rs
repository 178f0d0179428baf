//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod annotator;
mod date_resolver;

pub use annotator::AnnotatorPort;
#[cfg(test)]
pub use annotator::MockAnnotatorPort;
pub use date_resolver::{DatePreference, DateResolverPort};
#[cfg(test)]
pub use date_resolver::MockDateResolverPort;
