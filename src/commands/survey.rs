//! Survey root words - how much each one has to offer
//!
//! For every root word, finds the dictionary words a player could score with and the
//! best total score. Handy for spotting root words that make for a dull game.

use crate::config::GameConfig;
use crate::rules::{Verdict, WordValidator};
use crate::wordlists::Lexicon;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// What a single root word offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootReport {
    pub root_word: String,
    /// Number of acceptable words
    pub word_count: usize,
    /// Score for finding every acceptable word
    pub best_score: usize,
    /// Longest acceptable word, if any
    pub longest: Option<String>,
}

/// Statistics across all surveyed root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub reports: Vec<RootReport>,
    /// Root words offering fewer than the requested minimum number of words
    pub sparse: Vec<RootReport>,
    pub min_words: usize,
    pub average_words: f64,
    pub duration: Duration,
}

/// Every lexicon word that a fresh session rooted at `root_word` would accept
///
/// Sorted longest first, then alphabetically.
///
/// # Examples
/// ```
/// use word_scramble::commands::possible_words;
/// use word_scramble::config::GameConfig;
/// use word_scramble::wordlists::Lexicon;
///
/// let lexicon = Lexicon::from_words(["stone", "notes", "tone", "toe", "stones"]);
/// let words = possible_words("STONE", &lexicon, &GameConfig::default());
/// assert_eq!(words, ["NOTES", "TONE"]);
/// ```
#[must_use]
pub fn possible_words(root_word: &str, lexicon: &Lexicon, config: &GameConfig) -> Vec<String> {
    let validator = WordValidator::with_language(lexicon, config.language.clone());

    let mut words: Vec<String> = lexicon
        .iter()
        .filter(|word| {
            validator.evaluate(word, root_word, &[], config.minimum_word_length)
                == Verdict::Accepted
        })
        .map(str::to_string)
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

/// Build the report for one root word
#[must_use]
pub fn survey_root(root_word: &str, lexicon: &Lexicon, config: &GameConfig) -> RootReport {
    let words = possible_words(root_word, lexicon, config);
    RootReport {
        root_word: root_word.to_string(),
        word_count: words.len(),
        best_score: words.iter().map(|w| w.chars().count()).sum(),
        longest: words.first().cloned(),
    }
}

/// Survey every root word (or the first `limit`) in parallel
///
/// Reports come back in the same order as `root_words`.
#[must_use]
pub fn run_survey(
    root_words: &[String],
    lexicon: &Lexicon,
    config: &GameConfig,
    limit: Option<usize>,
    min_words: usize,
) -> SurveyStatistics {
    let roots: Vec<&String> = root_words
        .iter()
        .take(limit.unwrap_or(root_words.len()))
        .collect();

    println!("🔎 Surveying {} root words...", roots.len());

    // Progress bar
    let pb = ProgressBar::new(roots.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let reports: Vec<RootReport> = roots
        .par_iter()
        .map(|root| {
            let report = survey_root(root, lexicon, config);
            debug!(root = %report.root_word, words = report.word_count, "surveyed root");
            pb.set_message(report.root_word.clone());
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!".green().to_string());

    let sparse = reports
        .iter()
        .filter(|r| r.word_count < min_words)
        .cloned()
        .collect();
    let average_words = if reports.is_empty() {
        0.0
    } else {
        reports.iter().map(|r| r.word_count).sum::<usize>() as f64 / reports.len() as f64
    };

    SurveyStatistics {
        reports,
        sparse,
        min_words,
        average_words,
        duration: start.elapsed(),
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Root words:       {}", stats.reports.len());
    println!(
        "   Average words:    {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if let Some(best) = stats.reports.iter().max_by_key(|r| r.best_score) {
        println!(
            "   Richest root:     {} ({} words, {} points)",
            best.root_word.green().bold(),
            best.word_count,
            best.best_score
        );
    }

    if stats.sparse.is_empty() {
        println!(
            "\n✅ Every root word offers at least {} words",
            stats.min_words
        );
    } else {
        println!(
            "\n⚠️  {} with fewer than {} words:",
            "Sparse root words".yellow().bold(),
            stats.min_words
        );
        for report in &stats.sparse {
            println!(
                "   {:<12} {:>3} words {:>4} points",
                report.root_word.yellow(),
                report.word_count,
                report.best_score
            );
        }
    }
}
