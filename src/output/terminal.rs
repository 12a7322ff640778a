// Report rendering for the terminal.
//
// The ranking report keeps the classic line format exactly, so it is written
// without colors to any `Write`. Colors are reserved for the single-document
// and comparison displays.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::format_score;
use crate::pipeline::ranking::RankingReport;

/// Write the ranking report in its plain-text form.
///
/// ```text
/// Top 10 similar pairs of books:
/// Book 3 and Book 7 have similarity index: 0.412
/// ```
///
/// Document numbers are 1-indexed.
pub fn write_report<W: Write>(out: &mut W, report: &RankingReport, top_pairs: usize) -> Result<()> {
    writeln!(out, "Top {top_pairs} similar pairs of books:")?;
    for pair in report.pairs.iter().take(top_pairs) {
        writeln!(
            out,
            "Book {} and Book {} have similarity index: {}",
            pair.first + 1,
            pair.second + 1,
            format_score(pair.score)
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    documents: Vec<String>,
    pairs: Vec<JsonPair<'a>>,
    pairs_scored: usize,
    skipped: Vec<String>,
}

#[derive(Serialize)]
struct JsonPair<'a> {
    rank: usize,
    first: usize,
    second: usize,
    first_path: &'a str,
    second_path: &'a str,
    score: f64,
}

/// Write the ranking report as pretty-printed JSON.
///
/// Document numbers are 1-indexed, matching the text report.
pub fn write_json<W: Write>(out: &mut W, report: &RankingReport) -> Result<()> {
    let documents: Vec<String> = report
        .documents
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let pairs = report
        .pairs
        .iter()
        .enumerate()
        .map(|(rank, pair)| JsonPair {
            rank: rank + 1,
            first: pair.first + 1,
            second: pair.second + 1,
            first_path: &documents[pair.first],
            second_path: &documents[pair.second],
            score: pair.score,
        })
        .collect();

    let skipped = report
        .skipped
        .iter()
        .map(|&i| documents[i].clone())
        .collect();

    let json = JsonReport {
        documents: documents.clone(),
        pairs,
        pairs_scored: report.pairs_scored,
        skipped,
    };

    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

/// Display the similarity of two documents.
pub fn display_comparison(first: &Path, second: &Path, score: f64, shared: &[(&str, f64)]) {
    println!("\n{}", "=== Similarity ===".bold());
    println!("  {}", first.display());
    println!("  {}", second.display());
    println!("  Similarity index: {}", format_score(score).bold());

    if shared.is_empty() {
        println!("  {}", "No shared profile words.".dimmed());
        return;
    }

    println!("\n  Top shared words:");
    for (token, weight) in shared {
        println!("    {:<24} {:.4}", token, weight);
    }
    println!();
}
