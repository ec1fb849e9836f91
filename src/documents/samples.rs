use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::api::UploadPart;

use super::reader::{DocumentError, read_file};
use super::selection::SelectionError;

/// Label meaning "no sample selected".
pub const NO_SAMPLE: &str = "None";

const DEFAULT_SAMPLES: &[(&str, &str)] = &[
    ("Case 1 Sample", "Files/Case 1.pdf"),
    ("Case 2 Sample", "Files/Case 2.pdf"),
    ("Case 3 Sample", "Files/Case 3.pdf"),
];

/// Bundled sample documents, keyed by human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCatalog {
    entries: BTreeMap<String, PathBuf>,
}

impl Default for SampleCatalog {
    fn default() -> Self {
        DEFAULT_SAMPLES
            .iter()
            .map(|(label, path)| ((*label).to_string(), PathBuf::from(path)))
            .collect()
    }
}

impl FromIterator<(String, PathBuf)> for SampleCatalog {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl SampleCatalog {
    /// Builds a catalog from configured entries, falling back to the defaults when empty.
    pub fn from_config(entries: &BTreeMap<String, String>) -> Self {
        if entries.is_empty() {
            return Self::default();
        }
        entries
            .iter()
            .map(|(label, path)| (label.clone(), PathBuf::from(path)))
            .collect()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(label, path)| (label.as_str(), path.as_path()))
    }

    pub fn path(&self, label: &str) -> Option<&Path> {
        self.entries.get(label).map(PathBuf::as_path)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Reads a sample from disk as `<label>.pdf`.
    pub fn load(&self, label: &str) -> Result<UploadPart, SelectionError> {
        let path = self
            .path(label)
            .ok_or_else(|| SelectionError::UnknownSample(label.to_string()))?;

        let bytes = read_file(path).map_err(|e| match e {
            DocumentError::NotFound(path) => SelectionError::SampleNotFound { path },
            other => SelectionError::Document(other),
        })?;

        Ok(UploadPart::pdf(format!("{label}.pdf"), bytes))
    }
}
