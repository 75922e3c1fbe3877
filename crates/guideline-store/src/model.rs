use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_SOURCE: &str = "AHA";

/// A single practice guideline held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, e.g. "aha-001"
    pub id: String,
    /// Guideline title, e.g. "2024 AHA/ACC/HFSA Heart Failure Guideline"
    pub title: String,
    /// Canonical guideline text quoted back to the caller
    pub content: String,
    /// Clinical area, e.g. "Arrhythmias"
    pub category: String,
    /// Publication year
    pub year: i32,
    /// Issuing bodies, e.g. "AHA/ACC/HFSA"
    pub source: String,
    /// Search keywords; order is irrelevant to matching
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Partial document accepted by `DocumentStore::add_document`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub source: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl NewDocument {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation("title must not be empty".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(StoreError::Validation("content must not be empty".to_string()));
        }
        if matches!(&self.id, Some(id) if id.trim().is_empty()) {
            return Err(StoreError::Validation("id must not be blank".to_string()));
        }
        Ok(())
    }

    /// Fills every optional field with its default. `generated_id` is only
    /// used when no explicit id was supplied.
    pub fn into_document(self, generated_id: String, current_year: i32) -> Document {
        Document {
            id: self.id.unwrap_or(generated_id),
            title: self.title,
            content: self.content,
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            year: self.year.unwrap_or(current_year),
            source: self.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            keywords: self.keywords.unwrap_or_default(),
        }
    }
}
