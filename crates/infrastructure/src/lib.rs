//! Infrastructure layer - Adapters and configuration
//!
//! Concrete implementations of the application ports plus configuration
//! loading. The annotator model is built once at startup and shared
//! read-only across requests.

pub mod adapters;
pub mod config;
mod lexicon;

pub use adapters::{ChronoDateResolver, LexiconAnnotator};
pub use config::{AnnotatorConfig, AppConfig, ResolverConfig, ServerConfig};
