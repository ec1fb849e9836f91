use std::path::PathBuf;

use thiserror::Error;

use crate::api::UploadBatch;

use super::reader::{DocumentError, DocumentReader};
use super::samples::{NO_SAMPLE, SampleCatalog};

/// Problems found while turning a selection into an upload batch.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Nothing was selected; reported as a warning, never sent.
    #[error("Please upload at least one PDF or choose a sample.")]
    Empty,
    #[error("Sample file not found: {path}")]
    SampleNotFound { path: String },
    #[error("Unknown sample: {0}")]
    UnknownSample(String),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl SelectionError {
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Files picked by the user plus at most one sample, staged for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSelection {
    files: Vec<PathBuf>,
    sample: Option<String>,
}

impl DocumentSelection {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.add_files(files);
        self
    }

    #[must_use]
    pub fn with_sample(mut self, label: Option<&str>) -> Self {
        self.set_sample(label);
        self
    }

    pub fn add_files<I, P>(&mut self, files: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(files.into_iter().map(Into::into));
    }

    /// Selects a sample by label. `None` or the `"None"` label clears it.
    pub fn set_sample(&mut self, label: Option<&str>) {
        self.sample = label
            .map(str::trim)
            .filter(|l| !l.is_empty() && *l != NO_SAMPLE)
            .map(ToString::to_string);
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn sample(&self) -> Option<&str> {
        self.sample.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.sample.is_none()
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.sample = None;
    }

    /// Reads every selected document. User files come first, then the sample.
    ///
    /// Any unreadable document aborts the whole batch.
    pub fn build_batch(&self, catalog: &SampleCatalog) -> Result<UploadBatch, SelectionError> {
        if self.is_empty() {
            return Err(SelectionError::Empty);
        }

        let mut batch = UploadBatch::new();
        for path in &self.files {
            batch.push(DocumentReader::read(path)?);
        }
        if let Some(label) = &self.sample {
            batch.push(catalog.load(label)?);
        }
        Ok(batch)
    }
}
