use crate::error::{LineTallyError, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Extraction directory beside an archive. Removing it is tied to drop, so
/// cleanup also happens when counting fails partway through the entries.
#[derive(Debug)]
pub struct ExtractedArchive {
    dir: PathBuf,
}

impl ExtractedArchive {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Plain files at the top of the extraction directory, sorted. Entries
    /// the archive placed in subdirectories are not listed.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }
}

impl Drop for ExtractedArchive {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.dir).ok();
    }
}

/// Extract `archive_path` into a sibling `<file>_tmp` directory and hand
/// back the guard that owns it.
pub fn extract_beside(archive_path: &Path) -> Result<ExtractedArchive> {
    let dir = temp_dir_for(archive_path);
    if dir.exists() {
        return Err(LineTallyError::Archive {
            path: archive_path.display().to_string(),
            message: format!("extraction directory already exists: {}", dir.display()),
        });
    }

    fs::create_dir(&dir)?;
    // Guard owns the directory from here on; any error below still cleans up
    let extracted = ExtractedArchive { dir };

    let file = File::open(archive_path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| zip_error(archive_path, &e.to_string()))?;
    archive
        .extract(extracted.dir())
        .map_err(|e| zip_error(archive_path, &e.to_string()))?;

    Ok(extracted)
}

fn temp_dir_for(archive_path: &Path) -> PathBuf {
    let mut name = OsString::from(archive_path.as_os_str());
    name.push("_tmp");
    PathBuf::from(name)
}

fn zip_error(path: &Path, message: &str) -> LineTallyError {
    LineTallyError::Archive {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}
