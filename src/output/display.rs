//! Display functions for game and command results

use super::formatters::{rejection_alert, score_line, used_word_line};
use crate::commands::CheckResult;
use crate::game::Submission;
use colored::Colorize;

/// Print what happened to a submitted word
pub fn print_submission(submission: &Submission, root_word: &str, minimum_length: usize) {
    match submission {
        Submission::Ignored => {}
        Submission::Accepted { word, points } => {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                word.bright_white().bold(),
                format!("+{points}").green()
            );
        }
        Submission::Rejected(reason) => {
            let alert = rejection_alert(*reason, root_word, minimum_length);
            println!("{} {}", "✗".red().bold(), alert.title.red().bold());
            println!("  {}\n", alert.message.bright_black());
        }
    }
}

/// Print the result of checking words against a root word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Root word: {}", result.root_word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.submission {
            Submission::Ignored => {
                println!(
                    "  {:<14} {}",
                    "(blank)".bright_black(),
                    "ignored".bright_black()
                );
            }
            Submission::Accepted { word, .. } => {
                println!("  {:<14} {}", step.input, used_word_line(word).green());
            }
            Submission::Rejected(reason) => {
                let alert = rejection_alert(*reason, &result.root_word, result.minimum_length);
                println!("  {:<14} {}", step.input, alert.title.red());
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} ({} of {} accepted)",
            score_line(result.score),
            result.accepted(),
            result.steps.len()
        )
        .bold()
    );
}
