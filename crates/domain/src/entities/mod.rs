//! Domain entities

mod annotation;
mod extraction;

pub use annotation::{Annotation, Entity, Token};
pub use extraction::ExtractionResult;
