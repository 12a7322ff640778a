// Ranking pipeline: documents in, best-matching pairs out.
//
// Strategy: build one profile per document in input order (unreadable
// documents get an empty profile and are remembered as skipped), score the
// full pair matrix once, then keep the top pairs for the report.

use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use crate::profile::frequency::FrequencyProfile;
use crate::profile::traits::ProfileBuilder;
use crate::similarity::rank::{PairScore, SimilarityMatrix};

/// Outcome of ranking a document collection.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    /// Documents in input order; a pair's indices point into this list
    pub documents: Vec<PathBuf>,
    /// Best pairs, highest score first
    pub pairs: Vec<PairScore>,
    /// Total number of pairs that were scored
    pub pairs_scored: usize,
    /// Indices of documents that could not be read
    pub skipped: Vec<usize>,
}

/// Profile every document with `builder`, in order.
///
/// Returns the profiles alongside the indices of unreadable documents.
pub fn build_profiles(
    builder: &dyn ProfileBuilder,
    documents: &[PathBuf],
) -> Result<(Vec<FrequencyProfile>, Vec<usize>)> {
    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar().template("  Profiling [{bar:30}] {pos}/{len} ({eta})")?,
    );

    let mut profiles = Vec::with_capacity(documents.len());
    let mut skipped = Vec::new();

    for (i, path) in documents.iter().enumerate() {
        let outcome = pb.suspend(|| builder.build(path));
        if !outcome.readable {
            skipped.push(i);
        }
        profiles.push(outcome.profile);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        documents = documents.len(),
        skipped = skipped.len(),
        "Built document profiles"
    );

    Ok((profiles, skipped))
}

/// Run the whole pipeline and keep the `top_pairs` best pairs.
pub fn run(
    builder: &dyn ProfileBuilder,
    documents: Vec<PathBuf>,
    top_pairs: usize,
) -> Result<RankingReport> {
    let (profiles, skipped) = build_profiles(builder, &documents)?;

    let matrix = SimilarityMatrix::compute(&profiles);
    let mut pairs = matrix.ranked();
    let pairs_scored = pairs.len();
    pairs.truncate(top_pairs);

    if let Some(best) = pairs.first() {
        info!(
            pairs = pairs_scored,
            best_score = best.score,
            best_first = best.first + 1,
            best_second = best.second + 1,
            "Ranked document pairs"
        );
    }

    Ok(RankingReport {
        documents,
        pairs,
        pairs_scored,
        skipped,
    })
}
