//! Interactive chat mode for asking questions about uploaded documents.
//!
//! Provides a REPL-style interface with slash commands for staging and
//! submitting documents.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
pub(crate) mod ui;

pub use session::ChatSession;
