use anyhow::Result;
use inquire::InquireError;

use crate::session::{Message, Role};

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Formats a transcript entry as a labelled block.
pub fn render_message(message: &Message) -> String {
    let label = match message.role() {
        Role::User => Style::user(format!("{}:", message.role())),
        Role::Assistant => Style::assistant(format!("{}:", message.role())),
    };
    let body: Vec<String> = message
        .text()
        .lines()
        .map(|line| format!("  {line}"))
        .collect();
    format!("{label}\n{}", body.join("\n"))
}

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(None)` instead of propagating the error.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message_labels_role() {
        let rendered = render_message(&Message::user("What is the termination clause?"));
        assert!(rendered.contains("User:"));
        assert!(rendered.contains("  What is the termination clause?"));

        let rendered = render_message(&Message::assistant("line one\nline two"));
        assert!(rendered.contains("Assistant:"));
        assert!(rendered.contains("  line one\n  line two"));
    }

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        let result = handle_prompt_cancellation(|| Ok(7));
        assert_eq!(result.unwrap(), Some(7));
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_canceled() {
        let result: Result<Option<()>> =
            handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into()));
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_interrupted() {
        let result: Result<Option<()>> =
            handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into()));
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let result: Result<Option<()>> =
            handle_prompt_cancellation(|| Err(anyhow::anyhow!("Some other error")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Some other error"));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        let err = InquireError::Custom("test".into());
        assert!(!is_prompt_cancelled(&err));
    }
}
