// Pairwise similarity matrix and pair ranking.
//
// Only the upper triangle is scored; the lower triangle is a mirror and the
// diagonal is left at zero. Pairs come out best-first, with equal scores
// ordered by descending (first, second) index.

use serde::Serialize;

use super::overlap::similarity;
use crate::profile::frequency::FrequencyProfile;

/// Similarity of one unordered document pair. Indices are zero-based and
/// `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairScore {
    pub score: f64,
    pub first: usize,
    pub second: usize,
}

/// Symmetric N x N similarity matrix, stored row-major.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn compute(profiles: &[FrequencyProfile]) -> Self {
        let n = profiles.len();
        let mut scores = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let s = similarity(&profiles[i], &profiles[j]);
                scores[i * n + j] = s;
                scores[j * n + i] = s;
            }
        }

        Self { n, scores }
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Score for documents `i` and `j`. Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index out of range");
        self.scores[i * self.n + j]
    }

    /// Every unordered pair `i < j`, in row order.
    pub fn pairs(&self) -> impl Iterator<Item = PairScore> + '_ {
        (0..self.n).flat_map(move |i| {
            ((i + 1)..self.n).map(move |j| PairScore {
                score: self.scores[i * self.n + j],
                first: i,
                second: j,
            })
        })
    }

    /// All pairs sorted best-first.
    pub fn ranked(&self) -> Vec<PairScore> {
        let mut pairs: Vec<PairScore> = self.pairs().collect();
        pairs.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.first.cmp(&a.first))
                .then_with(|| b.second.cmp(&a.second))
        });
        pairs
    }
}

/// Score and rank every pair of profiles. Returns C(N, 2) entries.
pub fn rank_pairs(profiles: &[FrequencyProfile]) -> Vec<PairScore> {
    SimilarityMatrix::compute(profiles).ranked()
}
