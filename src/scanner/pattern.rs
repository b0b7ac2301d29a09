use crate::error::{LineTallyError, Result};
use globset::{GlobBuilder, GlobMatcher};

/// File-name glob, compiled once per run. Matching is case-insensitive so
/// the same pattern selects the same files on case-preserving filesystems.
#[derive(Debug, Clone)]
pub struct NamePattern {
    raw: String,
    matcher: GlobMatcher,
}

impl NamePattern {
    pub fn compile(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| LineTallyError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            raw: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    /// Archive handling keys off the pattern text, not file contents: any
    /// pattern containing "zip" selects the extract-then-count path.
    pub fn is_archive(&self) -> bool {
        self.raw.to_lowercase().contains("zip")
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}
