// Similarity scoring — profile overlap and pairwise ranking.

pub mod overlap;
pub mod rank;
