//! Annotation output of the entity/POS annotator

use serde::{Deserialize, Serialize};

use crate::value_objects::{EntityLabel, PosTag};

/// A recognized entity span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The surface text of the span, with original casing
    pub text: String,
    /// Taxonomy label assigned by the annotator
    pub label: EntityLabel,
}

impl Entity {
    /// Create a new entity span
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// A single POS-tagged token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text with original casing
    pub text: String,
    /// Coarse part-of-speech tag
    pub pos: PosTag,
}

impl Token {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// The full annotator output for one query
///
/// Both sequences are in text order; selection rules rely on that for
/// their "first match wins" semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Recognized entities in order of appearance
    pub entities: Vec<Entity>,
    /// POS-tagged tokens in order of appearance
    pub tokens: Vec<Token>,
}

impl Annotation {
    /// Create an annotation from entity and token sequences
    #[must_use]
    pub const fn new(entities: Vec<Entity>, tokens: Vec<Token>) -> Self {
        Self { entities, tokens }
    }

    /// An annotation with nothing recognized (e.g. for empty input)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// First entity whose label satisfies the predicate
    pub fn first_entity_where(&self, predicate: impl Fn(EntityLabel) -> bool) -> Option<&Entity> {
        self.entities.iter().find(|e| predicate(e.label))
    }

    /// First token carrying the given POS tag
    #[must_use]
    pub fn first_token_tagged(&self, pos: PosTag) -> Option<&Token> {
        self.tokens.iter().find(|t| t.pos == pos)
    }
}
