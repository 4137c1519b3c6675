//! Simple interactive CLI mode
//!
//! Line-based game loop for terminals where the TUI is not an option.

use crate::game::{GameSession, RootWordSource, Submission};
use crate::output::formatters::{score_line, used_word_line};
use crate::output::print_submission;
use crate::rules::DictionaryOracle;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// The session must already be started.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a restart finds
/// no root word.
pub fn run_simple<S, D>(session: &mut GameSession<S, D>) -> Result<()>
where
    S: RootWordSource,
    D: DictionaryOracle,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!(
        "Words need at least {} letters. Each word scores its length.\n",
        session.config().minimum_word_length
    );
    println!("Commands: ':words' to list your words, ':restart' for a new word, ':quit' to exit\n");

    print_root(session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "›".bright_cyan());
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                println!(
                    "\n👋 Thanks for playing! Final score: {}\n",
                    session.score()
                );
                return Ok(());
            }
            ":restart" | ":r" | ":new" => {
                session
                    .restart()
                    .context("could not draw a new root word")?;
                println!("\n🔄 New game started!\n");
                print_root(session);
            }
            ":words" | ":w" => {
                if session.used_words().is_empty() {
                    println!("No words yet.\n");
                } else {
                    for word in session.used_words() {
                        println!("  {}", used_word_line(word));
                    }
                    println!();
                }
            }
            input => {
                let submission = session.submit(input)?;
                let root = session.root_word().unwrap_or_default();
                print_submission(&submission, root, session.config().minimum_word_length);
                if matches!(submission, Submission::Accepted { .. }) {
                    println!("{}\n", score_line(session.score()).bright_white());
                }
            }
        }
    }
}

fn print_root<S, D>(session: &GameSession<S, D>)
where
    S: RootWordSource,
    D: DictionaryOracle,
{
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Root word: {}",
        session
            .root_word()
            .unwrap_or_default()
            .bright_yellow()
            .bold()
    );
    println!("{}", score_line(session.score()));
    println!("────────────────────────────────────────────────────────────\n");
}
