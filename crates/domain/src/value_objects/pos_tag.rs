//! Part-of-speech tag taxonomy

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Coarse part-of-speech tag assigned to a token
///
/// Only `Noun` is consulted by the selection rules; the other tags are
/// best-effort so the tagger output stays honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun
    Propn,
    /// Verb
    Verb,
    /// Adjective
    Adj,
    /// Adverb
    Adv,
    /// Pronoun
    Pron,
    /// Determiner
    Det,
    /// Adposition (preposition/postposition)
    Adp,
    /// Coordinating or subordinating conjunction
    Conj,
    /// Numeral
    Num,
    /// Punctuation
    Punct,
    /// Anything the tagger could not classify
    Other,
}

impl PosTag {
    /// The taxonomy name as reported by taggers
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Propn => "PROPN",
            Self::Verb => "VERB",
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Pron => "PRON",
            Self::Det => "DET",
            Self::Adp => "ADP",
            Self::Conj => "CONJ",
            Self::Num => "NUM",
            Self::Punct => "PUNCT",
            Self::Other => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PosTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NOUN" => Ok(Self::Noun),
            "PROPN" => Ok(Self::Propn),
            "VERB" => Ok(Self::Verb),
            "ADJ" => Ok(Self::Adj),
            "ADV" => Ok(Self::Adv),
            "PRON" => Ok(Self::Pron),
            "DET" => Ok(Self::Det),
            "ADP" => Ok(Self::Adp),
            "CONJ" | "CCONJ" | "SCONJ" => Ok(Self::Conj),
            "NUM" => Ok(Self::Num),
            "PUNCT" => Ok(Self::Punct),
            "X" => Ok(Self::Other),
            other => Err(DomainError::UnknownPosTag(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_taxonomy_names() {
        assert_eq!(PosTag::Noun.to_string(), "NOUN");
        assert_eq!(PosTag::Other.to_string(), "X");
    }

    #[test]
    fn parse_round_trips() {
        assert_eq!("noun".parse::<PosTag>().unwrap(), PosTag::Noun);
        assert_eq!("CCONJ".parse::<PosTag>().unwrap(), PosTag::Conj);
    }

    #[test]
    fn parse_unknown_tag_fails() {
        assert!("INTERJECTION".parse::<PosTag>().is_err());
    }
}
