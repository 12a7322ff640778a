// Min-overlap similarity between two frequency profiles.
//
// For every token present in both profiles we add the smaller of the two
// frequencies. Tokens that only one side has contribute nothing:
//
//   similarity = sum over shared tokens of min(freq_a, freq_b)
//
// Because each profile sums to at most 1.0, the score lands in [0, 1].
// Identical profiles score their own total mass, not 1.0.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::profile::frequency::FrequencyProfile;

/// Similarity between two profiles.
///
/// Symmetric bit for bit: both sides are walked in the same token order, so
/// the floating-point sum is accumulated identically either way round.
pub fn similarity(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    overlap_from_weights(a.weights(), b.weights())
}

/// Min-overlap from raw token -> weight maps.
///
/// Merge-walks the two sorted maps, so it costs O(|a| + |b|).
pub fn overlap_from_weights(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let mut left = a.iter().peekable();
    let mut right = b.iter().peekable();
    let mut sum = 0.0;

    while let (Some(&(ka, va)), Some(&(kb, vb))) = (left.peek(), right.peek()) {
        match ka.cmp(kb) {
            Ordering::Less => {
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                sum += va.min(*vb);
                left.next();
                right.next();
            }
        }
    }

    sum
}

/// Tokens present in both profiles with their contribution to the score,
/// largest first (ties in ascending token order), at most `limit` of them.
pub fn shared_tokens<'a>(
    a: &'a FrequencyProfile,
    b: &'a FrequencyProfile,
    limit: usize,
) -> Vec<(&'a str, f64)> {
    let mut shared: Vec<(&str, f64)> = a
        .iter()
        .filter_map(|(token, wa)| b.get(token).map(|wb| (token, wa.min(wb))))
        .collect();
    shared.sort_by(|x, y| y.1.total_cmp(&x.1).then_with(|| x.0.cmp(y.0)));
    shared.truncate(limit);
    shared
}
