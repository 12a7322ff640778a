// Profile builder trait — the seam between the ranking pipeline and the way
// documents become profiles.

use std::path::Path;

use super::frequency::FrequencyProfile;

/// Result of profiling one document.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub profile: FrequencyProfile,
    /// False when the document could not be opened or read. The profile is
    /// empty in that case.
    pub readable: bool,
}

/// Trait for turning a document on disk into a frequency profile.
///
/// Implementations never fail: an unreadable document yields an empty
/// profile so the rest of the collection can still be ranked.
pub trait ProfileBuilder {
    fn build(&self, path: &Path) -> BuildOutcome;
}
