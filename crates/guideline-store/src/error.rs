/// Errors raised by the guideline document store.
///
/// `Load` never escapes `DocumentStore::load_or_seed`; it exists so the load
/// branch can be tested and logged on its own.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid query: query must not be empty")]
    InvalidQuery,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },
}
