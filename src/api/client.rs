use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::batch::UploadBatch;
use super::error::ApiError;
use super::retry::{RetryPolicy, retrying_post};

/// Answer used when the backend's reply carries no `answer` field.
pub const NO_ANSWER: &str = "No answer returned.";

/// Multipart field name shared by every uploaded document.
const FILES_FIELD: &str = "files";

#[derive(Debug, Deserialize)]
struct AskResponse {
    #[serde(default)]
    answer: Option<String>,
}

/// Client for the document question-answering backend.
pub struct QaClient {
    client: Client,
    base_url: String,
    policy: RetryPolicy,
}

impl QaClient {
    pub fn new(base_url: impl Into<String>, policy: RetryPolicy) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}/", self.base_url)
    }

    /// Uploads every document of `batch` to the ingestion endpoint.
    pub async fn submit_documents(&self, batch: &UploadBatch) -> Result<(), ApiError> {
        if batch.is_empty() {
            return Err(ApiError::EmptyBatch);
        }

        let url = self.endpoint("upload");
        log::debug!("Uploading {} document(s) to {url}", batch.len());

        let client = &self.client;
        let url = url.as_str();

        // A multipart form is consumed by the request, so each attempt builds its own.
        let response = retrying_post(self.policy, move |_| async move {
            let form = build_form(batch)?;
            client.post(url).multipart(form).send().await
        })
        .await?;

        ensure_ok(&response)?;
        Ok(())
    }

    /// Asks a question about the uploaded documents and returns the answer text.
    pub async fn ask_question(&self, query: &str) -> Result<String, ApiError> {
        if query.trim().is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        let url = self.endpoint("ask");
        log::debug!("Asking {url}");

        let response = retrying_post(self.policy, |_| {
            self.client.post(&url).form(&[("query", query)]).send()
        })
        .await?;

        ensure_ok(&response)?;

        let body = response.text().await.map_err(ApiError::Request)?;
        parse_answer(&body)
    }
}

fn build_form(batch: &UploadBatch) -> Result<Form, reqwest::Error> {
    batch.parts().iter().try_fold(Form::new(), |form, part| {
        let file = Part::bytes(part.bytes.clone())
            .file_name(part.filename.clone())
            .mime_str(&part.mime_type)?;
        Ok(form.part(FILES_FIELD, file))
    })
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    let status = response.status();
    log::debug!("Backend responded with {status}");
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ApiError::Backend { status })
    }
}

fn parse_answer(body: &str) -> Result<String, ApiError> {
    let response: AskResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(response.answer.unwrap_or_else(|| NO_ANSWER.to_string()))
}
