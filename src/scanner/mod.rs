pub mod file_scanner;
pub mod pattern;

pub use file_scanner::{folder_label, FileScanner, MatchedFile};
pub use pattern::NamePattern;
