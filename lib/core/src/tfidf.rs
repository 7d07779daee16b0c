//! TF-IDF vectorizer: vocabulary and smoothed IDF fitted over a whole corpus

use crate::text;
use crate::{Error, Result, SparseVector};
use ahash::AHashMap;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    // term -> column, columns assigned in lexicographic term order
    vocabulary: AHashMap<String, u32>,
    // column -> inverse document frequency
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and IDF weights over every document at once.
    ///
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1` where `n` is the number of
    /// documents and `df(t)` the number of documents containing `t`.
    pub fn fit<S: AsRef<str>>(docs: &[S]) -> Result<Self> {
        // BTreeMap keeps terms sorted so column assignment is deterministic
        let mut term_dfs: BTreeMap<String, u32> = BTreeMap::new();
        for doc in docs {
            let mut terms = text::analyze(doc.as_ref());
            terms.sort_unstable();
            terms.dedup();
            for term in terms {
                *term_dfs.entry(term).or_insert(0) += 1;
            }
        }

        if term_dfs.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let n = docs.len() as f32;
        let mut vocabulary = AHashMap::with_capacity(term_dfs.len());
        let mut idf = Vec::with_capacity(term_dfs.len());
        for (column, (term, df)) in term_dfs.into_iter().enumerate() {
            vocabulary.insert(term, column as u32);
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Weight a document against the fitted vocabulary: raw term count times
    /// IDF, then L2-normalized. Unknown terms are ignored.
    pub fn transform(&self, doc: &str) -> SparseVector {
        let mut term_freqs: AHashMap<u32, u32> = AHashMap::new();
        for token in text::analyze(doc) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *term_freqs.entry(column).or_insert(0) += 1;
            }
        }

        let pairs = term_freqs
            .into_iter()
            .map(|(column, tf)| (column, tf as f32 * self.idf[column as usize]))
            .collect();

        let mut vector = SparseVector::from_pairs(pairs);
        vector.normalize();
        vector
    }

    pub fn fit_transform<S: AsRef<str>>(docs: &[S]) -> Result<(Self, Vec<SparseVector>)> {
        let vectorizer = Self::fit(docs)?;
        let vectors = docs
            .iter()
            .map(|doc| vectorizer.transform(doc.as_ref()))
            .collect();
        Ok((vectorizer, vectors))
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn term_index(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_index(term).map(|column| self.idf[column as usize])
    }
}
