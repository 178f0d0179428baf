//! Value objects for the annotation and extraction model

mod date_range;
mod entity_label;
mod pos_tag;

pub use date_range::DateRange;
pub use entity_label::EntityLabel;
pub use pos_tag::PosTag;
