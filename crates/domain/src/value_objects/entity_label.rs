//! Named-entity label taxonomy

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Label assigned to a recognized entity span
///
/// Mirrors the usual NER taxonomy. Downstream selection only consults
/// the location-like labels (`Gpe`, `Loc`, `Fac`) and `Date`; the rest
/// exist so annotators can report what they found without lying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// Geo-political entity: countries, cities, states
    Gpe,
    /// Non-GPE location: mountain ranges, bodies of water, regions
    Loc,
    /// Facility: buildings, airports, bridges, landmarks
    Fac,
    /// Absolute or relative date expression
    Date,
    /// Organization
    Org,
    /// Person name
    Person,
}

impl EntityLabel {
    /// Whether this label denotes a location-like entity
    ///
    /// The three location labels rank equally; any of them satisfies the
    /// location selection rule.
    #[must_use]
    pub const fn is_location(self) -> bool {
        matches!(self, Self::Gpe | Self::Loc | Self::Fac)
    }

    /// Whether this label denotes a date expression
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::Date)
    }

    /// The taxonomy name as reported by annotators
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Fac => "FAC",
            Self::Date => "DATE",
            Self::Org => "ORG",
            Self::Person => "PERSON",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GPE" => Ok(Self::Gpe),
            "LOC" => Ok(Self::Loc),
            "FAC" => Ok(Self::Fac),
            "DATE" => Ok(Self::Date),
            "ORG" => Ok(Self::Org),
            "PERSON" => Ok(Self::Person),
            other => Err(DomainError::UnknownEntityLabel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_labels_are_location() {
        assert!(EntityLabel::Gpe.is_location());
        assert!(EntityLabel::Loc.is_location());
        assert!(EntityLabel::Fac.is_location());
    }

    #[test]
    fn date_label_is_not_location() {
        assert!(!EntityLabel::Date.is_location());
        assert!(EntityLabel::Date.is_date());
    }

    #[test]
    fn org_and_person_match_nothing() {
        assert!(!EntityLabel::Org.is_location());
        assert!(!EntityLabel::Org.is_date());
        assert!(!EntityLabel::Person.is_location());
        assert!(!EntityLabel::Person.is_date());
    }

    #[test]
    fn display_matches_taxonomy_names() {
        assert_eq!(EntityLabel::Gpe.to_string(), "GPE");
        assert_eq!(EntityLabel::Date.to_string(), "DATE");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("gpe".parse::<EntityLabel>().unwrap(), EntityLabel::Gpe);
        assert_eq!("Date".parse::<EntityLabel>().unwrap(), EntityLabel::Date);
    }

    #[test]
    fn parse_unknown_label_fails() {
        let err = "MONEY".parse::<EntityLabel>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownEntityLabel(_)));
    }

    #[test]
    fn serde_uses_uppercase() {
        let json = serde_json::to_string(&EntityLabel::Gpe).unwrap();
        assert_eq!(json, "\"GPE\"");
        let back: EntityLabel = serde_json::from_str("\"FAC\"").unwrap();
        assert_eq!(back, EntityLabel::Fac);
    }
}
