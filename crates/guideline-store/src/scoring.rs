use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Document;

/// Query terms of this many characters or fewer are ignored.
const MIN_TERM_CHARS: usize = 2;

/// Weight table for lexical relevance scoring.
///
/// Term weights apply once per surviving query term; phrase weights apply at
/// most once per document when the whole query occurs verbatim.
///
/// Deserializes only from a JSON object with known keys; absent keys keep
/// their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ScoringWeights {
    pub title_term: u32,
    pub content_term: u32,
    pub keyword_term: u32,
    pub title_phrase: u32,
    pub content_phrase: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_term: 10,
            content_term: 3,
            keyword_term: 5,
            title_phrase: 15,
            content_phrase: 8,
        }
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WeightOverrides {
    title_term: u32,
    content_term: u32,
    keyword_term: u32,
    title_phrase: u32,
    content_phrase: u32,
}

impl Default for WeightOverrides {
    fn default() -> Self {
        let d = ScoringWeights::default();
        Self {
            title_term: d.title_term,
            content_term: d.content_term,
            keyword_term: d.keyword_term,
            title_phrase: d.title_phrase,
            content_phrase: d.content_phrase,
        }
    }
}

impl TryFrom<Map<String, Value>> for ScoringWeights {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let o: WeightOverrides = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            title_term: o.title_term,
            content_term: o.content_term,
            keyword_term: o.keyword_term,
            title_phrase: o.title_phrase,
            content_phrase: o.content_phrase,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub score: u32,
}

/// Lower-cased query plus its surviving terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub phrase: String,
    pub terms: Vec<String>,
}

impl NormalizedQuery {
    pub fn parse(query: &str) -> Self {
        let phrase = query.to_lowercase();
        let terms = phrase
            .split_whitespace()
            .filter(|term| term.chars().count() > MIN_TERM_CHARS)
            .map(str::to_string)
            .collect();
        Self { phrase, terms }
    }
}

pub fn score_document(document: &Document, query: &NormalizedQuery, weights: &ScoringWeights) -> u32 {
    let title = document.title.to_lowercase();
    let content = document.content.to_lowercase();
    let keywords: Vec<String> = document.keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut score = 0;
    for term in &query.terms {
        if title.contains(term.as_str()) {
            score += weights.title_term;
        }
        if content.contains(term.as_str()) {
            score += weights.content_term;
        }
        if keywords.iter().any(|k| k.contains(term.as_str())) {
            score += weights.keyword_term;
        }
    }

    if title.contains(query.phrase.as_str()) {
        score += weights.title_phrase;
    }
    if content.contains(query.phrase.as_str()) {
        score += weights.content_phrase;
    }
    score
}

/// Scores every document, drops non-matches and orders by descending score.
/// `sort_by` is stable, so equal scores keep insertion order.
pub fn rank<'a>(
    documents: &'a [Document],
    query: &NormalizedQuery,
    weights: &ScoringWeights,
) -> Vec<ScoredDocument<'a>> {
    let mut scored: Vec<ScoredDocument<'a>> = documents
        .iter()
        .map(|document| ScoredDocument {
            document,
            score: score_document(document, query, weights),
        })
        .filter(|s| s.score > 0)
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
