//! Related-skill recommendations
//!
//! [`Recommender`] owns the whole precomputed state: the catalog, the fitted
//! vectorizer and the similarity matrix. Construction runs the full pipeline
//! once; afterwards every lookup is a read-only O(R log R) pass over a single
//! matrix row, so one instance can be shared behind an `Arc`.

use crate::{Catalog, Error, Result, SimilarityMatrix, SkillRecord, TfIdfVectorizer};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::Path;
use tracing::{debug, info};

/// Number of recommendations returned per lookup unless configured otherwise
pub const DEFAULT_TOP_K: usize = 3;

/// A recommended skill with its similarity to the queried one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Skill")]
    pub skill: String,
    #[serde(rename = "Related_Skills")]
    pub related_skills: String,
    #[serde(rename = "Explanation")]
    pub explanation: String,
    #[serde(rename = "Popularity_Trend")]
    pub popularity_trend: String,
    #[serde(rename = "Industry_Focus")]
    pub industry_focus: String,
    #[serde(rename = "Resources")]
    pub resources: String,
    /// Cosine similarity formatted with two decimals
    #[serde(rename = "Similarity_Score")]
    pub similarity_score: String,
    #[serde(skip)]
    pub score: f32,
}

impl Recommendation {
    fn from_record(record: &SkillRecord, score: f32) -> Self {
        Self {
            skill: record.skill.clone(),
            related_skills: record.related_skills.clone(),
            explanation: record.explanation.clone(),
            popularity_trend: record.popularity_trend.clone(),
            industry_focus: record.industry_focus.clone(),
            resources: record.resources.clone(),
            similarity_score: format!("{:.2}", score),
            score,
        }
    }
}

pub struct Recommender {
    catalog: Catalog,
    vectorizer: TfIdfVectorizer,
    similarity: SimilarityMatrix,
    top_k: usize,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Result<Self> {
        Self::with_top_k(catalog, DEFAULT_TOP_K)
    }

    /// Vectorize the catalog and build the similarity matrix
    pub fn with_top_k(catalog: Catalog, top_k: usize) -> Result<Self> {
        if top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".to_string()));
        }

        let docs: Vec<&str> = catalog
            .iter()
            .map(|r| r.combined_features.as_str())
            .collect();
        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(docs.as_slice())?;
        debug!(
            "Vectorized {} skills over {} terms",
            vectors.len(),
            vectorizer.vocabulary_size()
        );

        let similarity = SimilarityMatrix::from_vectors(&vectors);
        info!("Similarity matrix ready ({} x {})", similarity.len(), similarity.len());

        Ok(Self {
            catalog,
            vectorizer,
            similarity,
            top_k,
        })
    }

    /// Load a catalog file and build a recommender over it
    pub fn from_path<P: AsRef<Path>>(path: P, top_k: usize) -> Result<Self> {
        let catalog = Catalog::load(path)?;
        info!("Loaded {} skills", catalog.len());
        Self::with_top_k(catalog, top_k)
    }

    /// Most similar other skills for `skill`, best first.
    ///
    /// Ties in score are broken by catalog order. The queried skill itself is
    /// never part of the result.
    pub fn recommend(&self, skill: &str) -> Result<Vec<Recommendation>> {
        let idx = self
            .catalog
            .find(skill)
            .ok_or_else(|| Error::SkillNotFound(skill.to_string()))?;

        let scores = match self.similarity.row(idx) {
            Some(row) => row,
            None => return Ok(Vec::new()),
        };

        let mut candidates: Vec<usize> = (0..scores.len()).filter(|&j| j != idx).collect();
        candidates.sort_by_key(|&j| (Reverse(OrderedFloat(scores[j])), j));
        candidates.truncate(self.top_k);

        debug!("Recommendations for '{}': {:?}", skill, candidates);

        Ok(candidates
            .into_iter()
            .filter_map(|j| {
                self.catalog
                    .get(j)
                    .map(|record| Recommendation::from_record(record, scores[j]))
            })
            .collect())
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    #[inline]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    #[inline]
    pub fn top_k(&self) -> usize {
        self.top_k
    }
}
