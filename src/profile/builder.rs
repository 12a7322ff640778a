// Word-frequency profile builder.
//
// Counts canonical tokens in a document, drops stop words, divides by the
// total token count and keeps only the most frequent words. The total still
// includes stop-word occurrences, so a profile's frequencies are shares of
// the whole document, not of the words that survived filtering.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::debug;

use super::frequency::FrequencyProfile;
use super::normalize::tokens;
use super::traits::{BuildOutcome, ProfileBuilder};

/// Canonical tokens never kept in a profile.
pub const STOP_WORDS: &[&str] = &["A", "AND", "AN", "OF", "IN", "THE"];

/// Default number of words kept per profile.
pub const DEFAULT_TOP_WORDS: usize = 100;

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Builds top-K word-frequency profiles from plain-text files.
#[derive(Debug, Clone)]
pub struct WordFrequencyBuilder {
    /// How many of the most frequent words each profile keeps
    pub top_words: usize,
}

impl Default for WordFrequencyBuilder {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl ProfileBuilder for WordFrequencyBuilder {
    fn build(&self, path: &Path) -> BuildOutcome {
        // The file handle is released as soon as the bytes are in memory
        match fs::read(path) {
            Ok(bytes) => {
                let profile = FrequencyProfile::from_text(&bytes, self.top_words);
                debug!(
                    path = %path.display(),
                    words = profile.len(),
                    tokens = profile.token_count(),
                    "Built frequency profile"
                );
                BuildOutcome {
                    profile,
                    readable: true,
                }
            }
            Err(e) => {
                eprintln!("Error: Could not open file {}", path.display());
                debug!(
                    path = %path.display(),
                    error = %e,
                    "Document unreadable, using empty profile"
                );
                BuildOutcome {
                    profile: FrequencyProfile::empty(),
                    readable: false,
                }
            }
        }
    }
}

/// Build a profile for the document at `path`, keeping `top_words` words.
///
/// Unreadable documents produce an empty profile and a diagnostic on stderr.
pub fn build_profile(path: &Path, top_words: usize) -> FrequencyProfile {
    WordFrequencyBuilder { top_words }.build(path).profile
}

impl FrequencyProfile {
    /// Build a profile from a document's raw bytes.
    ///
    /// Returns an empty profile when the text contains no canonical tokens.
    pub fn from_text(text: &[u8], top_words: usize) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut total: u64 = 0;

        for token in tokens(text) {
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return Self::empty();
        }

        counts.retain(|token, _| !is_stop_word(token));

        // Ranking on integer counts is the same as ranking on frequencies,
        // without rounding noise. Ties go to the lexically smaller token.
        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top_words);

        let weights: BTreeMap<String, f64> = ranked
            .into_iter()
            .map(|(token, count)| (token, count as f64 / total as f64))
            .collect();

        Self::from_weights(weights, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_sat_on_the_mat() {
        let p = FrequencyProfile::from_text(b"the cat sat on the mat", 100);
        assert_eq!(p.len(), 4);
        assert_eq!(p.token_count(), 6);
        for word in ["CAT", "SAT", "ON", "MAT"] {
            assert!((p.get(word).unwrap() - 1.0 / 6.0).abs() < 1e-12);
        }
        assert!(!p.contains("THE"));
    }

    #[test]
    fn test_stop_words_count_toward_total() {
        // 3 tokens, one of them a stop word
        let p = FrequencyProfile::from_text(b"an apple pie", 100);
        assert!((p.get("APPLE").unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert!((p.total_mass() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_only_stop_words_gives_empty_profile() {
        let p = FrequencyProfile::from_text(b"The and a of in AN", 100);
        assert!(p.is_empty());
        assert_eq!(p.token_count(), 6);
    }

    #[test]
    fn test_empty_and_punctuation_only_text() {
        assert!(FrequencyProfile::from_text(b"", 100).is_empty());
        assert!(FrequencyProfile::from_text(b" -- ... !! ", 100).is_empty());
    }

    #[test]
    fn test_truncation_keeps_most_frequent_with_token_tiebreak() {
        let p = FrequencyProfile::from_text(b"zeta zeta beta alpha gamma", 2);
        assert_eq!(p.len(), 2);
        assert!(p.contains("ZETA"));
        // ALPHA, BETA, GAMMA tie on one occurrence each
        assert!(p.contains("ALPHA"));
    }

    #[test]
    fn test_case_folding_merges_counts() {
        let p = FrequencyProfile::from_text(b"Whale WHALE whale, whale!", 100);
        assert_eq!(p.len(), 1);
        assert_eq!(p.get("WHALE"), Some(1.0));
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("THE"));
        assert!(!is_stop_word("the"));
        assert!(!is_stop_word("CAT"));
    }

    #[test]
    fn test_build_missing_file_is_unreadable() {
        let outcome = WordFrequencyBuilder::default()
            .build(Path::new("/definitely/not/here/lexsim-missing.txt"));
        assert!(!outcome.readable);
        assert!(outcome.profile.is_empty());
    }
}
