//! Word Scramble
//!
//! A word derivation game: make as many words as possible from the letters of a
//! randomly chosen root word. Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::config::GameConfig;
//! use word_scramble::game::{GameSession, Submission};
//! use word_scramble::rules::{Rejection, WordValidator};
//! use word_scramble::wordlists::{Lexicon, WordList};
//!
//! let roots = WordList::seeded(vec!["TELEVISION".to_string()], 1);
//! let lexicon = Lexicon::from_words(["tile", "lion", "vision"]);
//!
//! let mut session = GameSession::new(roots, WordValidator::new(lexicon), GameConfig::default());
//! session.start().unwrap();
//!
//! assert!(session.submit("tile").unwrap().is_accepted());
//! assert_eq!(
//!     session.submit("TILE").unwrap(),
//!     Submission::Rejected(Rejection::NotOriginal)
//! );
//! assert_eq!(session.score(), 4);
//! ```

// Core word types
pub mod core;

// Game rules and validation
pub mod rules;

// Session state
pub mod game;

// Configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
