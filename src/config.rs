use std::env;

use anyhow::{Context, Result};

use crate::profile::builder::DEFAULT_TOP_WORDS;

/// Default number of pairs in the ranking report.
pub const DEFAULT_TOP_PAIRS: usize = 10;

/// Default number of paths asked for in interactive mode.
pub const DEFAULT_PROMPT_COUNT: usize = 64;

/// Ranking parameters loaded from environment variables.
///
/// A .env file in the working directory is loaded at startup via dotenvy.
/// Command-line flags override whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Words kept per document profile (LEXSIM_TOP_WORDS)
    pub top_words: usize,
    /// Pairs printed in the report (LEXSIM_TOP_PAIRS)
    pub top_pairs: usize,
    /// Paths prompted for in interactive mode (LEXSIM_PROMPT_COUNT)
    pub prompt_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
            top_pairs: DEFAULT_TOP_PAIRS,
            prompt_count: DEFAULT_PROMPT_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults; set ones must be positive
    /// integers.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            top_words: read_positive(&lookup, "LEXSIM_TOP_WORDS", defaults.top_words)?,
            top_pairs: read_positive(&lookup, "LEXSIM_TOP_PAIRS", defaults.top_pairs)?,
            prompt_count: read_positive(&lookup, "LEXSIM_PROMPT_COUNT", defaults.prompt_count)?,
        })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        top_words: Option<usize>,
        top_pairs: Option<usize>,
    ) -> Result<Self> {
        if let Some(n) = top_words {
            self.top_words = n;
        }
        if let Some(n) = top_pairs {
            self.top_pairs = n;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_words == 0 {
            anyhow::bail!("top words must be at least 1");
        }
        if self.top_pairs == 0 {
            anyhow::bail!("top pairs must be at least 1");
        }
        Ok(())
    }
}

fn read_positive<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        anyhow::bail!("{key} must be a positive integer, got 0");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_words, 100);
        assert_eq!(config.top_pairs, 10);
        assert_eq!(config.prompt_count, 64);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("LEXSIM_TOP_WORDS", "50"),
            ("LEXSIM_TOP_PAIRS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.top_words, 50);
        assert_eq!(config.top_pairs, 3);
    }

    #[test]
    fn test_rejects_garbage_and_zero() {
        assert!(Config::from_lookup(lookup_from(&[("LEXSIM_TOP_WORDS", "lots")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("LEXSIM_TOP_PAIRS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("LEXSIM_PROMPT_COUNT", "-4")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(5), None).unwrap();
        assert_eq!(config.top_words, 5);
        assert_eq!(config.top_pairs, 10);
        assert!(Config::default().with_overrides(None, Some(0)).is_err());
    }
}
