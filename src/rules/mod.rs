//! Game rules
//!
//! Decides whether a candidate word is accepted, and if not, why.

mod oracle;
mod rejection;
mod validator;

pub use oracle::DictionaryOracle;
pub use rejection::{Rejection, Verdict};
pub use validator::{DEFAULT_LANGUAGE, WordValidator, is_long_enough, is_original, is_possible};
