use crate::config::ScanConfig;
use crate::error::{LineTallyError, Result};
use crate::scanner::pattern::NamePattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file selected for counting, with the labels its report row will carry.
#[derive(Debug, Clone)]
pub struct MatchedFile {
    pub path: PathBuf,
    pub filename: String,
    pub folder: String,
}

impl MatchedFile {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let folder = folder_label(&path);

        Self {
            path,
            filename,
            folder,
        }
    }
}

/// Display label for the directory containing `path`: the name of the
/// parent directory, falling back to the path itself when there is no
/// usable parent (a bare file name).
pub fn folder_label(path: &Path) -> String {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return path.display().to_string(),
    };

    match parent.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => parent.display().to_string(),
    }
}

pub struct FileScanner {
    pattern: NamePattern,
    recurse: bool,
}

impl FileScanner {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::compile(&config.pattern)?,
            recurse: config.recurse,
        })
    }

    pub fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    /// Enumerate files under `root` whose names match the pattern. Results
    /// are sorted by path for deterministic report order.
    pub fn scan(&self, root: &Path) -> Result<Vec<MatchedFile>> {
        if !root.is_dir() {
            return Err(LineTallyError::InvalidInput {
                path: root.display().to_string(),
            });
        }

        let mut walker = WalkDir::new(root).follow_links(false);
        if !self.recurse {
            walker = walker.max_depth(1);
        }

        let mut matched = Vec::new();
        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.pattern.matches_name(&name) {
                matched.push(MatchedFile::new(entry.into_path()));
            }
        }

        matched.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(matched)
    }
}
