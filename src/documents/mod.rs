//! Local documents: user-picked PDFs and bundled samples.

mod reader;
mod samples;
mod selection;

pub use reader::{DocumentError, DocumentReader};
pub use samples::{NO_SAMPLE, SampleCatalog};
pub use selection::{DocumentSelection, SelectionError};
