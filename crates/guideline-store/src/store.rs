use std::collections::HashSet;
use std::path::Path;

use chrono::{Datelike, Utc};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::model::{Document, NewDocument};
use crate::scoring::{self, NormalizedQuery, ScoredDocument, ScoringWeights};
use crate::seed::seed_documents;

const GENERATED_ID_PREFIX: &str = "aha-";

/// In-memory, insertion-ordered guideline collection.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
    weights: ScoringWeights,
}

impl DocumentStore {
    pub fn new(documents: Vec<Document>, weights: ScoringWeights) -> Self {
        Self { documents, weights }
    }

    pub fn seeded(weights: ScoringWeights) -> Self {
        Self::new(seed_documents(), weights)
    }

    /// Uses the persisted collection at `path` when it exists and parses,
    /// otherwise the built-in seed set. Never fails.
    pub fn load_or_seed(path: &Path, weights: ScoringWeights) -> Self {
        match try_load_persisted(path) {
            Some(documents) => {
                info!(
                    path = %path.display(),
                    documents = documents.len(),
                    "loaded guidelines from file"
                );
                Self::new(documents, weights)
            }
            None => {
                info!("using built-in sample guidelines");
                Self::seeded(weights)
            }
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn all_documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get_document_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn add_document(&mut self, input: NewDocument) -> Result<Document, StoreError> {
        input.validate()?;
        if let Some(id) = input.id.as_deref() {
            if self.get_document_by_id(id).is_some() {
                return Err(StoreError::Validation(format!("document id already exists: {id}")));
            }
        }

        let generated_id = self.generate_id();
        let document = input.into_document(generated_id, Utc::now().year());
        info!(id = %document.id, title = %document.title, "document added");
        self.documents.push(document.clone());
        Ok(document)
    }

    pub fn search(&self, query: &str) -> Result<Vec<&Document>, StoreError> {
        Ok(self
            .search_scored(query)?
            .into_iter()
            .map(|s| s.document)
            .collect())
    }

    pub fn search_scored(&self, query: &str) -> Result<Vec<ScoredDocument<'_>>, StoreError> {
        if query.trim().is_empty() {
            return Err(StoreError::InvalidQuery);
        }
        let normalized = NormalizedQuery::parse(query);
        Ok(scoring::rank(&self.documents, &normalized, &self.weights))
    }

    fn generate_id(&self) -> String {
        let base = format!("{GENERATED_ID_PREFIX}{}", Utc::now().timestamp_millis());
        if self.get_document_by_id(&base).is_none() {
            return base;
        }
        (2..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| self.get_document_by_id(candidate).is_none())
            .unwrap_or(base)
    }
}

/// `None` when the file is absent or unusable; read and parse failures are
/// logged here and never reach the caller.
pub fn try_load_persisted(path: &Path) -> Option<Vec<Document>> {
    if !path.exists() {
        info!(path = %path.display(), "no persisted guideline file");
        return None;
    }
    read_persisted(path)
        .inspect_err(|e| warn!(error = %e, "falling back to sample guidelines"))
        .ok()
}

pub fn read_persisted(path: &Path) -> Result<Vec<Document>, StoreError> {
    let load_error = |message: String| StoreError::Load {
        path: path.display().to_string(),
        message,
    };
    let content = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    let documents: Vec<Document> =
        serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))?;

    let mut seen = HashSet::new();
    for doc in &documents {
        if !seen.insert(doc.id.as_str()) {
            warn!(id = %doc.id, "duplicate document id in persisted file; lookups return the first");
        }
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::scoring::score_document;

    fn store() -> DocumentStore {
        DocumentStore::seeded(ScoringWeights::default())
    }

    #[test]
    fn heart_failure_ranks_the_heart_failure_guideline_first() {
        let store = store();
        let results = store.search("heart failure").unwrap();
        assert_eq!(results[0].id, "aha-001");
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert!(store().search("xyzxyz-no-match").unwrap().is_empty());
    }

    #[test]
    fn empty_or_blank_query_is_invalid() {
        let store = store();
        assert!(matches!(store.search(""), Err(StoreError::InvalidQuery)));
        assert!(matches!(store.search(" \t\n"), Err(StoreError::InvalidQuery)));
    }

    #[test]
    fn results_are_positive_scoring_members_of_the_store() {
        let store = store();
        for query in ["beta-blockers", "catheter ablation", "AV", "troponin testing", "the"] {
            let normalized = NormalizedQuery::parse(query);
            for doc in store.search(query).unwrap() {
                assert!(score_document(doc, &normalized, store.weights()) > 0);
                assert!(store.all_documents().contains(doc));
            }
        }
    }

    #[test]
    fn search_is_idempotent() {
        let store = store();
        let ids = |query: &str| -> Vec<String> {
            store.search(query).unwrap().iter().map(|d| d.id.clone()).collect()
        };
        let first = ids("ablation therapy");
        let second = ids("ablation therapy");
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn scores_are_non_increasing() {
        let store = store();
        let scored = store.search_scored("beta-blockers heart").unwrap();
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn content_only_ties_keep_insertion_order() {
        let mut store = store();
        let first = store
            .add_document(NewDocument::new("Anticoagulant dosing", "Adjust warfarin by INR."))
            .unwrap();
        let second = store
            .add_document(NewDocument::new("Valve disease", "Mechanical valves need warfarin."))
            .unwrap();

        let scored = store.search_scored("warfarin monitoring").unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score, 3);
        assert_eq!(scored[1].score, 3);
        assert_eq!(scored[0].document.id, first.id);
        assert_eq!(scored[1].document.id, second.id);
    }

    #[test]
    fn add_applies_defaults_and_generates_unique_ids() {
        let mut store = store();
        let a = store.add_document(NewDocument::new("T", "C")).unwrap();
        let b = store.add_document(NewDocument::new("T", "C")).unwrap();

        assert_eq!(a.category, "General");
        assert_eq!(a.source, "AHA");
        assert!(a.keywords.is_empty());
        assert_eq!(a.year, Utc::now().year());
        assert!(a.id.starts_with("aha-"));
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 8);
        assert_eq!(store.all_documents().last(), Some(&b));
    }

    #[test]
    fn add_then_get_round_trips() {
        let mut store = store();
        let input = NewDocument {
            category: Some("Hypertension".to_string()),
            keywords: Some(vec!["blood pressure".to_string()]),
            ..NewDocument::new("2017 High Blood Pressure Guideline", "Target below 130/80.")
        };
        let added = store.add_document(input.clone()).unwrap();
        let fetched = store.get_document_by_id(&added.id).unwrap();
        assert_eq!(fetched, &input.into_document(added.id.clone(), added.year));
    }

    #[test]
    fn add_rejects_missing_fields_and_duplicate_ids() {
        let mut store = store();
        assert!(matches!(
            store.add_document(NewDocument::new("", "C")),
            Err(StoreError::Validation(_))
        ));
        let duplicate = NewDocument {
            id: Some("aha-003".to_string()),
            ..NewDocument::new("T", "C")
        };
        assert!(matches!(store.add_document(duplicate), Err(StoreError::Validation(_))));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn get_unknown_id_is_none() {
        assert!(store().get_document_by_id("aha-999").is_none());
    }

    #[test]
    fn persisted_file_replaces_seed_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"x-1","title":"Lipids","content":"Statins.","category":"Prevention","year":2019,"source":"AHA/ACC","keywords":["LDL"]}}]"#
        )
        .unwrap();

        let store = DocumentStore::load_or_seed(file.path(), ScoringWeights::default());
        assert_eq!(store.len(), 1);
        assert_eq!(store.all_documents()[0].id, "x-1");
        assert_eq!(store.search("ldl").unwrap().len(), 1);
    }

    #[test]
    fn malformed_file_falls_back_to_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        assert!(matches!(read_persisted(file.path()), Err(StoreError::Load { .. })));
        let store = DocumentStore::load_or_seed(file.path(), ScoringWeights::default());
        assert_eq!(store.len(), 6);
        assert!(store.get_document_by_id("aha-001").is_some());
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guidelines.json");
        assert!(try_load_persisted(&path).is_none());
        assert_eq!(DocumentStore::load_or_seed(&path, ScoringWeights::default()).len(), 6);
    }
}
