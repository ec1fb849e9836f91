/// MIME type used for every PDF part.
pub const PDF_MIME: &str = "application/pdf";

/// One document in an upload: file name, raw bytes and MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl UploadPart {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(filename, bytes, PDF_MIME)
    }
}

/// The documents sent in a single upload request.
///
/// File names are not required to be unique; duplicates are sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadBatch {
    parts: Vec<UploadPart>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: UploadPart) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[UploadPart] {
        &self.parts
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.filename.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl FromIterator<UploadPart> for UploadBatch {
    fn from_iter<I: IntoIterator<Item = UploadPart>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_filenames_are_kept() {
        let batch: UploadBatch = [
            UploadPart::pdf("a.pdf", b"one".to_vec()),
            UploadPart::pdf("a.pdf", b"two".to_vec()),
        ]
        .into_iter()
        .collect();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.filenames(), vec!["a.pdf", "a.pdf"]);
    }

    #[test]
    fn test_pdf_part_mime() {
        let part = UploadPart::pdf("contract.pdf", b"%PDF-1.4".to_vec());
        assert_eq!(part.mime_type, "application/pdf");
    }
}
