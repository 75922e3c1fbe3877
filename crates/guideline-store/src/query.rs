use crate::error::StoreError;
use crate::scoring::ScoredDocument;
use crate::store::DocumentStore;

pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Validates a caller query, runs it against the store and keeps the head of
/// the ranking.
#[derive(Debug, Clone, Copy)]
pub struct QueryService {
    limit: usize,
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    NoMatches { query: String },
    Matches(QueryMatches<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatches<'a> {
    pub query: String,
    /// Match count before truncation.
    pub total_matches: usize,
    pub top: Vec<ScoredDocument<'a>>,
}

impl QueryService {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn run<'a>(&self, store: &'a DocumentStore, query: &str) -> Result<QueryOutcome<'a>, StoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(StoreError::InvalidQuery);
        }

        let mut ranked = store.search_scored(query)?;
        if ranked.is_empty() {
            return Ok(QueryOutcome::NoMatches {
                query: query.to_string(),
            });
        }

        let total_matches = ranked.len();
        ranked.truncate(self.limit);
        Ok(QueryOutcome::Matches(QueryMatches {
            query: query.to_string(),
            total_matches,
            top: ranked,
        }))
    }
}
