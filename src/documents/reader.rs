use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::api::UploadPart;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("not a PDF file: {0}")]
    NotPdf(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub struct DocumentReader;

impl DocumentReader {
    /// Checks that `path` names an existing PDF without reading it.
    pub fn check(path: &Path) -> Result<(), DocumentError> {
        let display = path.display().to_string();
        if !has_pdf_extension(path) {
            return Err(DocumentError::NotPdf(display));
        }
        if !path.is_file() {
            return Err(DocumentError::NotFound(display));
        }
        Ok(())
    }

    /// Reads a user-selected PDF into an upload part named after the file.
    pub fn read(path: &Path) -> Result<UploadPart, DocumentError> {
        let display = path.display().to_string();

        if !has_pdf_extension(path) {
            return Err(DocumentError::NotPdf(display));
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| DocumentError::NotPdf(display.clone()))?;

        let bytes = read_file(path)?;
        Ok(UploadPart::pdf(filename, bytes))
    }
}

/// Reads a whole regular file into memory.
pub(super) fn read_file(path: &Path) -> Result<Vec<u8>, DocumentError> {
    let display = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|e| io_error(&display, e))?;
    if !metadata.is_file() {
        return Err(DocumentError::NotFound(display));
    }

    fs::read(path).map_err(|e| io_error(&display, e))
}

fn io_error(path: &str, source: io::Error) -> DocumentError {
    if source.kind() == io::ErrorKind::NotFound {
        DocumentError::NotFound(path.to_string())
    } else {
        DocumentError::Io {
            path: path.to_string(),
            source,
        }
    }
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
