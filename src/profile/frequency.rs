// FrequencyProfile — what a single document talks about, as numbers.
//
// A profile maps canonical tokens to their share of the document's tokens.
// Only the most frequent non-stop-words are kept, so the values sum to at
// most 1.0. Entries live in a BTreeMap: every walk over a profile happens in
// token order, which keeps sums reproducible run to run.

use std::collections::BTreeMap;

use colored::Colorize;

/// Relative word frequencies for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyProfile {
    /// Canonical token -> relative frequency in (0, 1]
    weights: BTreeMap<String, f64>,
    /// Number of canonical tokens the frequencies were divided by,
    /// stop words included
    token_count: u64,
}

impl FrequencyProfile {
    /// A profile with no entries. Used for unreadable and empty documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a profile from already-normalized weights.
    pub fn from_weights(weights: BTreeMap<String, f64>, token_count: u64) -> Self {
        Self {
            weights,
            token_count,
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    /// Entries in ascending token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    /// Sum of all frequencies. Equal to the profile's similarity with itself.
    pub fn total_mass(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Entries by descending frequency, ties in ascending token order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Display the top `limit` words as a bar chart in the terminal.
    ///
    /// Bars are scaled to the most frequent word so the shape is readable
    /// even when every frequency is small.
    pub fn display(&self, title: &str, limit: usize) {
        println!(
            "\n{}",
            format!(
                "=== {} ({} words, {} of {} tokens profiled) ===",
                title,
                self.len(),
                format_percent(self.total_mass()),
                self.token_count
            )
            .bold()
        );
        println!();

        if self.is_empty() {
            println!("  {}", "No words to show.".dimmed());
            return;
        }

        let ranked = self.ranked();
        let top = ranked.first().map(|(_, w)| *w).unwrap_or(0.0);
        let bar_width: usize = 20;

        for (i, (token, weight)) in ranked.iter().take(limit).enumerate() {
            let filled = if top > 0.0 {
                (weight / top * bar_width as f64).round() as usize
            } else {
                0
            };
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

            let ratio = if top > 0.0 { weight / top } else { 0.0 };
            let colored_bar = if ratio >= 0.5 {
                bar.bright_green()
            } else if ratio >= 0.2 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "  {:>3}. {:<24} {} {:.4}",
                i + 1,
                token.bold(),
                colored_bar,
                weight
            );
        }
        println!();
    }
}

fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
