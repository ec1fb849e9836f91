use anyhow::Result;
use exitcode::ExitCode;

use super::{GlobalOptions, api_exit_code};
use crate::api::QaClient;
use crate::chat::ui;
use crate::session::{AskOutcome, Transcript, ask_question};
use crate::ui::Spinner;

pub struct AskOptions {
    pub query: String,
}

pub async fn run_ask(global: &GlobalOptions, options: AskOptions) -> Result<ExitCode> {
    let config = global.resolve()?;
    let client = QaClient::new(config.api_url.clone(), config.retry);

    let mut transcript = Transcript::new();
    let outcome = {
        let _spinner = Spinner::new("Thinking...");
        ask_question(&mut transcript, &client, &options.query).await
    };

    let code = match &outcome {
        AskOutcome::Answered(answer) => {
            println!("{answer}");
            exitcode::OK
        }
        AskOutcome::Ignored => {
            ui::print_warning("Please enter a question.");
            exitcode::USAGE
        }
        AskOutcome::Failed(e) => {
            if let Some(message) = outcome.user_message() {
                ui::print_error(message);
            }
            api_exit_code(e)
        }
    };

    Ok(code)
}
