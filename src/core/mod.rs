//! Core word types for the game
//!
//! Normalization and letter counting shared by the rules, the session and the word lists.
//! Everything here is pure and has no knowledge of dictionaries or sessions.

mod word;

pub use word::{LetterPool, normalize};
