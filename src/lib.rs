//! # docqa - Legal Document Q&A client
//!
//! `docqa` uploads PDF documents to a question-answering backend and lets you
//! ask natural-language questions about them, keeping a running chat
//! transcript in the terminal.
//!
//! ## Features
//!
//! - **Interactive mode**: stage documents, submit them and chat with `docqa`
//! - **One-shot commands**: `docqa upload` and `docqa ask` for scripting
//! - **Resilient requests**: an unreachable backend is retried before giving up
//! - **Sample documents**: bundled examples selectable by label
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session
//! docqa
//!
//! # Upload documents, then ask a question
//! docqa upload ./contract.pdf --sample "Case 1 Sample"
//! docqa ask "What is the termination clause?"
//!
//! # Point at another backend
//! API_URL=http://qa.internal:8000 docqa
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/docqa/config.toml`:
//!
//! ```toml
//! [backend]
//! url = "http://localhost:8000"
//!
//! [retry]
//! max_attempts = 10
//! backoff_secs = 2
//!
//! [samples]
//! "Case 1 Sample" = "Files/Case 1.pdf"
//! ```

/// Backend client with retry on connection failure.
pub mod api;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// User documents and bundled samples.
pub mod documents;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Transcript and the actions that update it.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
