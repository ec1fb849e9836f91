use std::fmt;

/// Greeting seeded into every new transcript.
pub const GREETING: &str = "Hello! I am your Legal Document Assistant. \
     Please upload one or more PDF files to begin: stage them with /add \
     (or pick a sample with /sample), then run /submit.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("User"),
            Self::Assistant => f.write_str("Assistant"),
        }
    }
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The ordered, append-only message history of one session.
///
/// Messages are kept oldest first and are never reordered or removed.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    initialized: bool,
}

impl Transcript {
    /// Creates an empty, uninitialized transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the greeting on first call. Later calls leave the transcript untouched.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.messages.push(Message::assistant(GREETING));
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Messages appended at or after `index`, for incremental rendering.
    pub fn since(&self, index: usize) -> &[Message] {
        self.messages.get(index..).unwrap_or_default()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
