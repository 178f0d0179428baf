//! Port adapters

mod chrono_date_resolver;
mod lexicon_annotator;

pub use chrono_date_resolver::ChronoDateResolver;
pub use lexicon_annotator::LexiconAnnotator;
