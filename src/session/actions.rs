//! User actions that talk to the backend and update the transcript.

use crate::api::{ApiError, QaClient};
use crate::documents::{DocumentSelection, SampleCatalog, SelectionError};

use super::transcript::{Message, Transcript};

pub const UPLOAD_ACK: &str =
    "Your documents are processed. You may now ask your legal question below.";
pub const UPLOAD_SUCCESS: &str = "Documents uploaded and processed successfully.";
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";
pub const ASK_FAILED: &str = "An error occurred while retrieving the response.";

/// Result of submitting the staged documents.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend accepted the batch.
    Uploaded { filenames: Vec<String> },
    /// The selection was empty or a local document could not be read.
    Rejected(SelectionError),
    /// The backend call failed.
    Failed(ApiError),
}

impl SubmitOutcome {
    /// Text shown to the user for this outcome.
    pub fn user_message(&self) -> String {
        match self {
            Self::Uploaded { .. } => UPLOAD_SUCCESS.to_string(),
            Self::Rejected(e) => e.to_string(),
            Self::Failed(_) => UPLOAD_FAILED.to_string(),
        }
    }
}

/// Result of asking a question.
#[derive(Debug)]
pub enum AskOutcome {
    Answered(String),
    /// Blank input; nothing recorded.
    Ignored,
    Failed(ApiError),
}

impl AskOutcome {
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Answered(answer) => Some(answer.as_str()),
            Self::Ignored => None,
            Self::Failed(_) => Some(ASK_FAILED),
        }
    }
}

/// Uploads the selected documents and acknowledges success in the transcript.
///
/// An empty selection never reaches the network.
pub async fn submit_documents(
    transcript: &mut Transcript,
    client: &QaClient,
    selection: &DocumentSelection,
    catalog: &SampleCatalog,
) -> SubmitOutcome {
    let batch = match selection.build_batch(catalog) {
        Ok(batch) => batch,
        Err(e) => {
            if !e.is_validation() {
                log::info!("Could not prepare upload: {e}");
            }
            return SubmitOutcome::Rejected(e);
        }
    };

    match client.submit_documents(&batch).await {
        Ok(()) => {
            transcript.append(Message::assistant(UPLOAD_ACK));
            SubmitOutcome::Uploaded {
                filenames: batch.filenames().into_iter().map(String::from).collect(),
            }
        }
        Err(e) => {
            log::info!("Upload to {} failed: {e}", client.base_url());
            SubmitOutcome::Failed(e)
        }
    }
}

/// Records the question, asks the backend and records the answer.
///
/// The question stays in the transcript even when the backend call fails.
pub async fn ask_question(
    transcript: &mut Transcript,
    client: &QaClient,
    query: &str,
) -> AskOutcome {
    if query.trim().is_empty() {
        return AskOutcome::Ignored;
    }

    transcript.append(Message::user(query));

    match client.ask_question(query).await {
        Ok(answer) => {
            transcript.append(Message::assistant(answer.clone()));
            AskOutcome::Answered(answer)
        }
        Err(e) => {
            log::info!("Question to {} failed: {e}", client.base_url());
            AskOutcome::Failed(e)
        }
    }
}
