//! Lexicon-backed entity and POS annotator
//!
//! Gazetteer NER over an Aho-Corasick automaton plus a heuristic POS
//! tagger. The automaton is the "model": built once from the built-in
//! lexicon and any configured extensions, then shared read-only.

use aho_corasick::{AhoCorasick, MatchKind};
use application::error::ApplicationError;
use application::ports::AnnotatorPort;
use async_trait::async_trait;
use domain::{Annotation, Entity, EntityLabel, PosTag, Token};
use tracing::debug;

use crate::config::AnnotatorConfig;
use crate::lexicon;

/// A token with its byte offsets in the source text
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

/// Entity/POS annotator backed by the built-in lexicon
pub struct LexiconAnnotator {
    matcher: AhoCorasick,
    labels: Vec<EntityLabel>,
}

impl std::fmt::Debug for LexiconAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconAnnotator")
            .field("patterns", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl LexiconAnnotator {
    /// Build the annotator model from the built-in lexicon plus config extensions
    pub fn new(config: &AnnotatorConfig) -> Result<Self, ApplicationError> {
        let mut patterns: Vec<String> = Vec::new();
        let mut labels: Vec<EntityLabel> = Vec::new();

        let sources: [(&[&str], &[String], EntityLabel); 3] = [
            (lexicon::GPE_TERMS, &config.extra_gpe, EntityLabel::Gpe),
            (lexicon::LOC_TERMS, &config.extra_loc, EntityLabel::Loc),
            (lexicon::FAC_TERMS, &config.extra_fac, EntityLabel::Fac),
        ];

        for (builtin, extra, label) in sources {
            for term in builtin {
                patterns.push((*term).to_string());
                labels.push(label);
            }
            for term in extra {
                let term = term.trim().to_lowercase();
                if !term.is_empty() {
                    patterns.push(term);
                    labels.push(label);
                }
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                ApplicationError::Configuration(format!("Failed to build gazetteer matcher: {e}"))
            })?;

        debug!(patterns = patterns.len(), "Annotator model built");
        Ok(Self { matcher, labels })
    }

    /// Annotate synchronously; the port wraps this
    fn annotate_text(&self, text: &str) -> Annotation {
        if text.is_empty() {
            return Annotation::empty();
        }

        let words = tokenize(text);

        let mut spans: Vec<(usize, Entity)> = self.gazetteer_entities(text);
        spans.extend(date_entities(text, &words));
        spans.sort_by_key(|(start, _)| *start);
        let entities = spans.into_iter().map(|(_, e)| e).collect();

        let tokens = words
            .iter()
            .map(|w| Token::new(w.text, tag_word(w.text)))
            .collect();

        Annotation::new(entities, tokens)
    }

    /// Gazetteer matches with word-boundary checks, in text order
    fn gazetteer_entities(&self, text: &str) -> Vec<(usize, Entity)> {
        let bytes = text.as_bytes();
        self.matcher
            .find_iter(text)
            .filter(|m| {
                let before_ok = m.start() == 0 || !bytes[m.start() - 1].is_ascii_alphanumeric();
                let after_ok = m.end() == bytes.len() || !bytes[m.end()].is_ascii_alphanumeric();
                before_ok && after_ok
            })
            .map(|m| {
                let label = self.labels[m.pattern().as_usize()];
                (m.start(), Entity::new(&text[m.start()..m.end()], label))
            })
            .collect()
    }
}

#[async_trait]
impl AnnotatorPort for LexiconAnnotator {
    async fn annotate(&self, text: &str) -> Result<Annotation, ApplicationError> {
        Ok(self.annotate_text(text))
    }

    async fn is_ready(&self) -> bool {
        // The model is built in the constructor; existing means ready.
        !self.labels.is_empty()
    }
}

/// Split into whitespace-delimited words, stripping edge punctuation
///
/// Interior punctuation survives, so "2025-01-15" and "don't" stay
/// single tokens while "Paris," loses its comma.
fn tokenize(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut chunk_start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = chunk_start.take() {
                push_trimmed(text, start, i, &mut words);
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(i);
        }
    }
    if let Some(start) = chunk_start {
        push_trimmed(text, start, text.len(), &mut words);
    }

    words
}

/// Trim non-alphanumeric edges off a chunk and record the remainder
fn push_trimmed<'a>(text: &'a str, start: usize, end: usize, words: &mut Vec<Word<'a>>) {
    let chunk = &text[start..end];
    let trimmed_front = chunk.trim_start_matches(|c: char| !c.is_alphanumeric());
    let lead = chunk.len() - trimmed_front.len();
    let trimmed = trimmed_front.trim_end_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        return;
    }
    let word_start = start + lead;
    words.push(Word {
        start: word_start,
        end: word_start + trimmed.len(),
        text: &text[word_start..word_start + trimmed.len()],
    });
}

/// Date expressions in text order
///
/// Recognizes relative-day words, weekday names with an optional
/// next/this/last qualifier, month-name expressions with adjacent day
/// numbers, and numeric dates like 2025-01-15.
fn date_entities(text: &str, words: &[Word<'_>]) -> Vec<(usize, Entity)> {
    let mut entities = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let lower = word.text.to_lowercase();

        if lexicon::RELATIVE_DAYS.contains(&lower.as_str()) {
            entities.push((word.start, Entity::new(word.text, EntityLabel::Date)));
            continue;
        }

        if lexicon::WEEKDAYS.contains(&lower.as_str()) {
            let span_start = preceding_qualifier(words, i).unwrap_or(word.start);
            entities.push((
                span_start,
                Entity::new(&text[span_start..word.end], EntityLabel::Date),
            ));
            continue;
        }

        if lexicon::MONTHS.contains(&lower.as_str()) {
            let (start, end) = month_span(words, i);
            entities.push((start, Entity::new(&text[start..end], EntityLabel::Date)));
            continue;
        }

        if is_numeric_date(&lower) {
            entities.push((word.start, Entity::new(word.text, EntityLabel::Date)));
        }
    }

    entities
}

/// Start offset of a next/this/last qualifier directly before `i`, if any
fn preceding_qualifier(words: &[Word<'_>], i: usize) -> Option<usize> {
    if i == 0 {
        return None;
    }
    let prev = &words[i - 1];
    let lower = prev.text.to_lowercase();
    lexicon::WEEKDAY_QUALIFIERS
        .contains(&lower.as_str())
        .then_some(prev.start)
}

/// Span of a month mention, absorbing an adjacent day number
fn month_span(words: &[Word<'_>], i: usize) -> (usize, usize) {
    let month = &words[i];
    let day_after = words
        .get(i + 1)
        .filter(|w| lexicon::parse_day_of_month(w.text).is_some());
    if let Some(next) = day_after {
        return (month.start, next.end);
    }
    let day_before = i
        .checked_sub(1)
        .map(|j| &words[j])
        .filter(|w| lexicon::parse_day_of_month(w.text).is_some());
    if let Some(prev) = day_before {
        return (prev.start, month.end);
    }
    (month.start, month.end)
}

/// Whether a token looks like a numeric calendar date
fn is_numeric_date(token: &str) -> bool {
    let separators = ['-', '/', '.'];
    let has_separator = token.chars().any(|c| separators.contains(&c));
    let rest_numeric = token
        .chars()
        .all(|c| c.is_ascii_digit() || separators.contains(&c));
    let parts: Vec<&str> = token.split(separators).collect();
    has_separator
        && rest_numeric
        && parts.len() == 3
        && parts.iter().all(|p| !p.is_empty())
}

/// Heuristic coarse POS tagging for a single word
///
/// Closed-class lists first, then shape heuristics; open-class words
/// default to NOUN, which is the only tag consulted downstream.
fn tag_word(word: &str) -> PosTag {
    let lower = word.to_lowercase();
    let lower = lower.as_str();

    if word.chars().all(|c| c.is_ascii_digit()) || is_numeric_date(lower) {
        return PosTag::Num;
    }
    if lexicon::DETERMINERS.contains(&lower) {
        return PosTag::Det;
    }
    if lexicon::ADPOSITIONS.contains(&lower) {
        return PosTag::Adp;
    }
    if lexicon::PRONOUNS.contains(&lower) {
        return PosTag::Pron;
    }
    if lexicon::CONJUNCTIONS.contains(&lower) {
        return PosTag::Conj;
    }
    if lexicon::VERBS.contains(&lower) {
        return PosTag::Verb;
    }
    if lexicon::ADVERBS.contains(&lower) {
        return PosTag::Adv;
    }
    if lexicon::ADJECTIVES.contains(&lower) {
        return PosTag::Adj;
    }
    // Relative-day words behave like nouns ("see you tomorrow")
    if lexicon::RELATIVE_DAYS.contains(&lower) {
        return PosTag::Noun;
    }
    if lexicon::WEEKDAYS.contains(&lower) || lexicon::MONTHS.contains(&lower) {
        return PosTag::Propn;
    }
    if word.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::Propn;
    }
    PosTag::Noun
}
