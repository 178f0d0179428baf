//! Ordered selection rules over an annotation
//!
//! The location and date-text choices are each an ordered list of named
//! candidate-producing rules, tried in sequence until one yields a
//! non-empty result. Keeping them as a flat list makes the priority
//! order explicit and lets each rule be tested in isolation.

use domain::{Annotation, EntityLabel, PosTag};
use tracing::debug;

/// Date keywords tested against the lowercased query, in priority order.
///
/// Matching is substring containment, not word-boundary: "monday" fires
/// inside "mondayish". The original behaves this way and callers depend
/// on the observable output, so the overmatch is kept.
pub const DATE_KEYWORDS: [&str; 10] = [
    "today",
    "tomorrow",
    "yesterday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// A single candidate-producing rule
///
/// Rules are pure functions over the annotation and the original query;
/// `name` identifies the rule in logs and tests.
pub struct SelectionRule {
    /// Rule identifier for logging
    pub name: &'static str,
    /// Produce a candidate, or `None` to pass to the next rule
    pub select: fn(&Annotation, &str) -> Option<String>,
}

impl std::fmt::Debug for SelectionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The location rule chain, highest priority first
#[must_use]
pub fn location_rules() -> Vec<SelectionRule> {
    vec![
        // First entity labeled GPE/LOC/FAC, in annotator order. The three
        // labels rank equally; position decides.
        SelectionRule {
            name: "location_entity",
            select: |annotation, _query| {
                annotation
                    .first_entity_where(EntityLabel::is_location)
                    .map(|e| e.text.clone())
            },
        },
        // No location entity: fall back to the first noun token.
        SelectionRule {
            name: "first_noun",
            select: |annotation, _query| {
                annotation
                    .first_token_tagged(PosTag::Noun)
                    .map(|t| t.text.clone())
            },
        },
    ]
}

/// The date-text rule chain, highest priority first
#[must_use]
pub fn date_text_rules() -> Vec<SelectionRule> {
    vec![
        // A DATE entity anywhere wins, independent of keywords elsewhere.
        SelectionRule {
            name: "date_entity",
            select: |annotation, _query| {
                annotation
                    .first_entity_where(EntityLabel::is_date)
                    .map(|e| e.text.clone())
            },
        },
        // Keyword containment in the lowercased query, fixed priority order.
        SelectionRule {
            name: "date_keyword",
            select: |_annotation, query| {
                let lowered = query.to_lowercase();
                DATE_KEYWORDS
                    .iter()
                    .find(|kw| lowered.contains(*kw))
                    .map(|kw| (*kw).to_string())
            },
        },
        // Last resort: hand the whole query to the resolver.
        SelectionRule {
            name: "full_query",
            select: |_annotation, query| Some(query.to_string()),
        },
    ]
}

/// Run a rule chain and return the first non-empty candidate
fn run_chain(rules: &[SelectionRule], annotation: &Annotation, query: &str) -> Option<String> {
    for rule in rules {
        let candidate = (rule.select)(annotation, query).filter(|c| !c.is_empty());
        if let Some(candidate) = candidate {
            debug!(rule = rule.name, candidate = %candidate, "Selection rule matched");
            return Some(candidate);
        }
    }
    None
}

/// Select the location string for a query, if any
#[must_use]
pub fn select_location(annotation: &Annotation, query: &str) -> Option<String> {
    run_chain(&location_rules(), annotation, query)
}

/// Select the date-bearing text for a query
///
/// Always yields a value: the final rule falls back to the whole query,
/// which for an empty query is the empty string.
#[must_use]
pub fn select_date_text(annotation: &Annotation, query: &str) -> String {
    run_chain(&date_text_rules(), annotation, query).unwrap_or_else(|| query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Entity, Token};

    fn annotation(entities: Vec<Entity>, tokens: Vec<Token>) -> Annotation {
        Annotation::new(entities, tokens)
    }

    #[test]
    fn location_prefers_entity_over_noun() {
        let a = annotation(
            vec![Entity::new("Paris", EntityLabel::Gpe)],
            vec![Token::new("restaurants", PosTag::Noun)],
        );
        assert_eq!(
            select_location(&a, "restaurants in Paris"),
            Some("Paris".to_string())
        );
    }

    #[test]
    fn location_takes_first_entity_in_order() {
        let a = annotation(
            vec![
                Entity::new("Lake Geneva", EntityLabel::Loc),
                Entity::new("Zurich", EntityLabel::Gpe),
            ],
            vec![],
        );
        assert_eq!(
            select_location(&a, "from Lake Geneva to Zurich"),
            Some("Lake Geneva".to_string())
        );
    }

    #[test]
    fn fac_label_satisfies_location_rule() {
        let a = annotation(vec![Entity::new("JFK Airport", EntityLabel::Fac)], vec![]);
        assert_eq!(
            select_location(&a, "parking near JFK Airport"),
            Some("JFK Airport".to_string())
        );
    }

    #[test]
    fn location_falls_back_to_first_noun() {
        let a = annotation(
            vec![],
            vec![
                Token::new("best", PosTag::Adj),
                Token::new("pizza", PosTag::Noun),
                Token::new("place", PosTag::Noun),
            ],
        );
        assert_eq!(select_location(&a, "best pizza place"), Some("pizza".to_string()));
    }

    #[test]
    fn location_none_without_entities_or_nouns() {
        let a = annotation(vec![], vec![Token::new("quickly", PosTag::Adv)]);
        assert_eq!(select_location(&a, "quickly"), None);
    }

    #[test]
    fn non_location_entities_do_not_count() {
        let a = annotation(
            vec![Entity::new("Acme Corp", EntityLabel::Org)],
            vec![Token::new("offices", PosTag::Noun)],
        );
        assert_eq!(
            select_location(&a, "Acme Corp offices"),
            Some("offices".to_string())
        );
    }

    #[test]
    fn date_entity_beats_keyword() {
        // "today" appears first in the string, but the DATE entity wins.
        let a = annotation(vec![Entity::new("next friday", EntityLabel::Date)], vec![]);
        assert_eq!(
            select_date_text(&a, "today's plan for next friday"),
            "next friday"
        );
    }

    #[test]
    fn keyword_priority_is_list_order_not_text_order() {
        // "monday" precedes "tomorrow" in the text, but "tomorrow" comes
        // first in the keyword list.
        let a = Annotation::empty();
        assert_eq!(select_date_text(&a, "monday or tomorrow"), "tomorrow");
    }

    #[test]
    fn keyword_matches_inside_larger_word() {
        let a = Annotation::empty();
        assert_eq!(select_date_text(&a, "the mondayish report"), "monday");
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let a = Annotation::empty();
        assert_eq!(select_date_text(&a, "See you SATURDAY"), "saturday");
    }

    #[test]
    fn date_text_falls_back_to_full_query() {
        let a = Annotation::empty();
        assert_eq!(select_date_text(&a, "best pizza place"), "best pizza place");
    }

    #[test]
    fn empty_query_yields_empty_date_text() {
        let a = Annotation::empty();
        assert_eq!(select_date_text(&a, ""), "");
    }

    #[test]
    fn keyword_list_order_is_fixed() {
        assert_eq!(DATE_KEYWORDS[0], "today");
        assert_eq!(DATE_KEYWORDS[1], "tomorrow");
        assert_eq!(DATE_KEYWORDS[2], "yesterday");
        assert_eq!(DATE_KEYWORDS[9], "sunday");
    }

    #[test]
    fn chains_have_expected_rule_order() {
        let names: Vec<_> = location_rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["location_entity", "first_noun"]);

        let names: Vec<_> = date_text_rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["date_entity", "date_keyword", "full_query"]);
    }
}
