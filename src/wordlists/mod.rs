//! Word lists for the game
//!
//! Embedded root words and dictionary compiled into the binary, plus loaders for
//! user-supplied lists and the [`WordList`] / [`Lexicon`] types the session consumes.

mod embedded;
mod lexicon;
pub mod loader;
mod random;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use lexicon::Lexicon;
pub use random::WordList;
