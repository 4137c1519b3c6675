//! Terminal output formatting
//!
//! Player-facing wording and pretty-printing for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_submission};
pub use formatters::{Alert, rejection_alert};
