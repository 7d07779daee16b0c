//! # skillrec Core
//!
//! Core library for the skillrec related-skill recommender.
//!
//! This crate provides the whole recommendation pipeline:
//!
//! - [`Catalog`] - CSV skill catalog with case-insensitive name lookup
//! - [`features`] - Composite text built from each skill's descriptive fields
//! - [`TfIdfVectorizer`] - TF-IDF weighting with English stop-word removal
//! - [`SimilarityMatrix`] - All-pairs cosine similarity, computed once
//! - [`Recommender`] - Immutable service object answering top-K lookups
//!
//! ## Example
//!
//! ```rust
//! use skillrec_core::{Catalog, Recommender, SkillRecord};
//!
//! let catalog = Catalog::from_records(vec![
//!     SkillRecord::new("Python", "Data Science", "general purpose", "Rising", "Tech", ""),
//!     SkillRecord::new("R", "Data Science Stats", "general purpose stats", "Stable", "Tech", ""),
//!     SkillRecord::new("Welding", "Metalwork", "joins metal", "Stable", "Manufacturing", ""),
//! ]).unwrap();
//!
//! let recommender = Recommender::new(catalog).unwrap();
//! let recs = recommender.recommend("python").unwrap();
//! assert_eq!(recs[0].skill, "R");
//! ```

pub mod catalog;
pub mod error;
pub mod features;
pub mod recommender;
pub mod similarity;
pub mod text;
pub mod tfidf;
pub mod vector;

pub use catalog::{Catalog, SkillRecord, REQUIRED_COLUMNS};
pub use error::{Error, Result};
pub use recommender::{Recommendation, Recommender, DEFAULT_TOP_K};
pub use similarity::SimilarityMatrix;
pub use tfidf::TfIdfVectorizer;
pub use vector::SparseVector;
