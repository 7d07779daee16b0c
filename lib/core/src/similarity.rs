//! All-pairs cosine similarity
//!
//! Built once from the vectorized catalog and read-only afterwards. Row `i`
//! of the matrix corresponds to row `i` of the catalog.

use crate::SparseVector;
use rayon::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    n: usize,
    // row-major n * n
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute cosine similarity between every pair of vectors.
    /// Rows are filled in parallel; the diagonal is pinned to 1.0.
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0f32; n * n];

        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                let a = &vectors[i];
                for (j, slot) in row.iter_mut().enumerate() {
                    *slot = if i == j { 1.0 } else { a.cosine_similarity(&vectors[j]) };
                }
            });
        }

        Self { n, data }
    }

    /// Number of rows (and columns)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.n {
            Some(&self.data[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }
}
