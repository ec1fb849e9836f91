use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};
use std::path::PathBuf;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::api::QaClient;
use crate::config::ResolvedConfig;
use crate::documents::{DocumentReader, DocumentSelection, NO_SAMPLE};
use crate::session::actions::ASK_FAILED;
use crate::session::{self, AskOutcome, SubmitOutcome, Transcript};
use crate::ui::{Spinner, Style, handle_prompt_cancellation};

/// An interactive question-answering session.
///
/// Owns the transcript for as long as the REPL runs; it is dropped when the
/// session ends.
pub struct ChatSession {
    config: ResolvedConfig,
    client: QaClient,
    transcript: Transcript,
    selection: DocumentSelection,
    rendered: usize,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: ResolvedConfig) -> Self {
        let client = QaClient::new(config.api_url.clone(), config.retry);
        Self {
            config,
            client,
            transcript: Transcript::new(),
            selection: DocumentSelection::new(),
            rendered: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        self.transcript.initialize();
        self.render_new_messages();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        let completer =
            SlashCommandCompleter::new(self.config.samples.labels().map(ToString::to_string));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(completer.clone())
                .with_help_message("Ask a legal question, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await? {
                            break;
                        }
                    }
                    Input::Question(query) => {
                        self.ask(&query).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Add(paths) => self.add_files(paths),
            SlashCommand::Sample(label) => self.choose_sample(label.as_deref())?,
            SlashCommand::Samples => ui::print_samples(&self.config.samples),
            SlashCommand::Selection => ui::print_selection(&self.selection),
            SlashCommand::Submit => self.submit().await,
            SlashCommand::History => ui::print_messages(self.transcript.all()),
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    fn add_files(&mut self, paths: Vec<String>) {
        if paths.is_empty() {
            println!("Usage: /add <file.pdf> [more.pdf ...]");
            return;
        }

        let mut staged = Vec::new();
        for path in paths.into_iter().map(PathBuf::from) {
            match DocumentReader::check(&path) {
                Ok(()) => staged.push(path),
                Err(e) => ui::print_error(&e.to_string()),
            }
        }

        if !staged.is_empty() {
            let count = staged.len();
            self.selection.add_files(staged);
            ui::print_success(&format!(
                "Staged {count} file(s). Run {} to upload.",
                Style::command("/submit")
            ));
        }
    }

    fn choose_sample(&mut self, label: Option<&str>) -> Result<()> {
        let label = match label {
            Some(label) => label.to_string(),
            None => {
                let options: Vec<String> = std::iter::once(NO_SAMPLE.to_string())
                    .chain(self.config.samples.labels().map(ToString::to_string))
                    .collect();
                let picked = handle_prompt_cancellation(|| {
                    Ok(Select::new("Select a sample PDF", options).prompt()?)
                })?;
                let Some(label) = picked else {
                    return Ok(());
                };
                label
            }
        };

        if label == NO_SAMPLE {
            self.selection.set_sample(None);
            ui::print_success("Sample cleared");
        } else if self.config.samples.contains(&label) {
            self.selection.set_sample(Some(&label));
            ui::print_success(&format!("Sample set to {}", Style::value(&label)));
        } else {
            ui::print_error(&format!("Unknown sample: {label}"));
            ui::print_samples(&self.config.samples);
        }
        Ok(())
    }

    async fn submit(&mut self) {
        let outcome = {
            let _spinner = Spinner::new("Uploading documents...");
            session::submit_documents(
                &mut self.transcript,
                &self.client,
                &self.selection,
                &self.config.samples,
            )
            .await
        };

        match &outcome {
            SubmitOutcome::Uploaded { filenames } => {
                ui::print_uploaded(&outcome.user_message(), filenames);
                self.selection.clear();
            }
            SubmitOutcome::Rejected(e) if e.is_validation() => {
                ui::print_warning(&outcome.user_message());
            }
            SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) => {
                ui::print_error(&outcome.user_message());
            }
        }

        self.render_new_messages();
    }

    async fn ask(&mut self, query: &str) {
        let outcome = {
            let _spinner = Spinner::new("Thinking...");
            session::ask_question(&mut self.transcript, &self.client, query).await
        };

        self.render_new_messages();

        if let AskOutcome::Failed(_) = outcome {
            ui::print_error(ASK_FAILED);
        }
    }

    fn render_new_messages(&mut self) {
        ui::print_messages(self.transcript.since(self.rendered));
        self.rendered = self.transcript.len();
    }
}
