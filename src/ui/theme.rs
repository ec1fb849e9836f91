//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

fn styled<T: Display>(text: T, apply: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        apply(&text)
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Chat", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        styled(text, |t| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "api url", "retries")
    pub fn label<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Style for primary values (e.g., file names, sample labels)
    pub fn value<T: Display>(text: T) -> String {
        styled(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., paths, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        styled(text, |t| t.red().bold().to_string())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        styled(text, |t| t.yellow().to_string())
    }

    /// Style for commands (e.g., "/submit", "/help")
    pub fn command<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().italic().to_string())
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Style for the "User:" transcript label
    pub fn user<T: Display>(text: T) -> String {
        styled(text, |t| t.white().bold().to_string())
    }

    /// Style for the "Assistant:" transcript label
    pub fn assistant<T: Display>(text: T) -> String {
        styled(text, |t| t.blue().bold().to_string())
    }
}
