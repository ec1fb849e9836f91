use inquire::autocompletion::{Autocomplete, Replacement};

use crate::documents::NO_SAMPLE;

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/add", "Stage PDF files for upload"),
    ("/sample", "Choose a sample document"),
    ("/samples", "List sample documents"),
    ("/selection", "Show staged documents"),
    ("/submit", "Upload the staged documents"),
    ("/history", "Show the whole conversation"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
];

const SAMPLE_PREFIX: &str = "/sample ";

/// Slash command autocompleter, including sample labels after `/sample `.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter {
    samples: Vec<String>,
}

impl SlashCommandCompleter {
    pub fn new<I, S>(samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            samples: samples.into_iter().map(Into::into).collect(),
        }
    }

    fn sample_suggestions(&self, partial: &str) -> Vec<String> {
        std::iter::once(NO_SAMPLE)
            .chain(self.samples.iter().map(String::as_str))
            .filter(|label| label.starts_with(partial))
            .map(|label| format!("{SAMPLE_PREFIX}{label}"))
            .collect()
    }
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        if let Some(partial) = input.strip_prefix(SAMPLE_PREFIX) {
            return Ok(self.sample_suggestions(partial));
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        if input.starts_with(SAMPLE_PREFIX) {
            return Ok(highlighted_suggestion);
        }

        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Add(Vec<String>),
    Sample(Option<String>),
    Samples,
    Selection,
    Submit,
    History,
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Question(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies a line of REPL input. Questions keep the text exactly as typed.
pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    trimmed.strip_prefix('/').map_or_else(
        || Input::Question(input.to_string()),
        parse_slash_command,
    )
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let rest = || parts.iter().skip(1).copied();

    let command = match parts.first().copied() {
        Some("add") => {
            let args = cmd.split_once(char::is_whitespace).map_or("", |(_, args)| args);
            SlashCommand::Add(parse_paths(args))
        }
        Some("sample") => {
            let label = rest().collect::<Vec<_>>().join(" ");
            SlashCommand::Sample((!label.is_empty()).then_some(label))
        }
        Some("samples") => SlashCommand::Samples,
        Some("selection") => SlashCommand::Selection,
        Some("submit") => SlashCommand::Submit,
        Some("history") => SlashCommand::History,
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

/// Splits `/add` arguments into paths.
///
/// Quotes and backslash escapes follow shell rules. Unquoted words are joined
/// until one ends in `.pdf`, so `Case 1.pdf` stays a single path.
fn parse_paths(args: &str) -> Vec<String> {
    let words = shlex::split(args)
        .unwrap_or_else(|| args.split_whitespace().map(String::from).collect());

    let mut paths = Vec::new();
    let mut current = String::new();
    for word in words {
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
        if current.to_ascii_lowercase().ends_with(".pdf") {
            paths.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        paths.push(current);
    }
    paths
}
