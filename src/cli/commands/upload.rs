use anyhow::Result;
use exitcode::ExitCode;

use super::{GlobalOptions, api_exit_code, selection_exit_code};
use crate::api::QaClient;
use crate::chat::ui;
use crate::documents::DocumentSelection;
use crate::session::{SubmitOutcome, Transcript, submit_documents};
use crate::status;
use crate::ui::{Spinner, Style};

pub struct UploadOptions {
    pub files: Vec<String>,
    pub sample: Option<String>,
}

pub async fn run_upload(global: &GlobalOptions, options: UploadOptions) -> Result<ExitCode> {
    let config = global.resolve()?;
    let client = QaClient::new(config.api_url.clone(), config.retry);
    let selection = DocumentSelection::new()
        .with_files(options.files)
        .with_sample(options.sample.as_deref());

    let mut transcript = Transcript::new();
    let outcome = {
        let _spinner = Spinner::new("Uploading documents...");
        submit_documents(&mut transcript, &client, &selection, &config.samples).await
    };

    let code = match &outcome {
        SubmitOutcome::Uploaded { filenames } => {
            status!("{} {}", Style::success("✓"), outcome.user_message());
            for name in filenames {
                println!("{name}");
            }
            exitcode::OK
        }
        SubmitOutcome::Rejected(e) => {
            if e.is_validation() {
                ui::print_warning(&outcome.user_message());
            } else {
                ui::print_error(&outcome.user_message());
            }
            selection_exit_code(e)
        }
        SubmitOutcome::Failed(e) => {
            ui::print_error(&outcome.user_message());
            api_exit_code(e)
        }
    };

    Ok(code)
}
