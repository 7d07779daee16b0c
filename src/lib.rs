//! # skillrec
//!
//! Related-skill recommendations from a CSV skill catalog.
//!
//! Every skill's descriptive fields are combined into one text document,
//! weighted with TF-IDF (English stop-words removed) and compared pairwise
//! with cosine similarity once at startup. A lookup then returns the most
//! similar other skills.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install skillrec
//! skillrec --catalog hack.csv --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use skillrec::prelude::*;
//!
//! let recommender = Recommender::from_path("hack.csv", DEFAULT_TOP_K).unwrap();
//! for rec in recommender.recommend("Python").unwrap() {
//!     println!("{} ({})", rec.skill, rec.similarity_score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `skillrec-core` - Catalog, TF-IDF vectorizer, similarity matrix, recommender
//! - `skillrec-api` - REST endpoint and landing page

// Re-export core types
pub use skillrec_core::{
    Catalog, SkillRecord,
    TfIdfVectorizer, SparseVector, SimilarityMatrix,
    Recommender, Recommendation, DEFAULT_TOP_K,
    Error, Result,
};

// Re-export API
pub use skillrec_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, SkillRecord,
        TfIdfVectorizer, SparseVector, SimilarityMatrix,
        Recommender, Recommendation, DEFAULT_TOP_K,
        Error, Result,
        RestApi,
    };
}
