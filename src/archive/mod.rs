pub mod extractor;

pub use extractor::{extract_beside, ExtractedArchive};
