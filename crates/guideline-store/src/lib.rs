pub mod error;
pub mod model;
pub mod query;
pub mod scoring;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use model::{Document, NewDocument};
pub use query::{QueryMatches, QueryOutcome, QueryService};
pub use scoring::{ScoredDocument, ScoringWeights};
pub use store::DocumentStore;
