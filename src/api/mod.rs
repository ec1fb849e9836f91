mod batch;
mod client;
mod error;
pub mod retry;

pub use batch::{PDF_MIME, UploadBatch, UploadPart};
pub use client::{NO_ANSWER, QaClient};
pub use error::ApiError;
pub use retry::{RetryError, RetryPolicy, retrying_post};
