//! Conversation state for one interactive session.

pub mod actions;
mod transcript;

pub use actions::{AskOutcome, SubmitOutcome, ask_question, submit_documents};
pub use transcript::{GREETING, Message, Role, Transcript};
