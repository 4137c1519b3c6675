//! Game sessions
//!
//! Session lifecycle (start, submit, restart) and the root word supply it draws from.

mod session;
mod source;

pub use session::{GameSession, SessionError, Submission};
pub use source::{FixedRoots, RootWordSource};
