use guideline_store::Document;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryGuidelinesParams {
    /// The user's question or search terms, e.g. "heart failure medications".
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddDocumentParams {
    /// Guideline title.
    pub title: String,
    /// Full guideline text.
    pub content: String,
    /// Clinical category (default: "General").
    pub category: Option<String>,
    /// Publication year between 1900 and 2100 (default: current year).
    pub year: Option<i32>,
    /// Issuing bodies (default: "AHA").
    pub source: Option<String>,
    /// Search keywords.
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDocumentParams {
    /// Document ID such as "aha-001".
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Citation {
    pub id: String,
    pub title: String,
    pub source: String,
    pub year: i32,
    pub category: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QueryGuidelinesResponse {
    /// Complete formatted answer; relay it verbatim.
    pub response: String,
    /// Number of matching guidelines before truncation.
    pub total_matches: usize,
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub year: i32,
    pub source: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddDocumentResponse {
    pub message: String,
    pub document: DocumentDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub year: i32,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentSummary>,
}

impl From<&Document> for DocumentDetail {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            content: doc.content.clone(),
            category: doc.category.clone(),
            year: doc.year,
            source: doc.source.clone(),
            keywords: doc.keywords.clone(),
        }
    }
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            category: doc.category.clone(),
            year: doc.year,
            source: doc.source.clone(),
        }
    }
}
