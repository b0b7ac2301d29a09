use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineTallyError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input directory: {path}")]
    InvalidInput { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid file pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Archive extraction failed for {path}: {message}")]
    Archive { path: String, message: String },

    #[error("Report write failed: {message}")]
    Report { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for LineTallyError {
    fn user_message(&self) -> String {
        match self {
            LineTallyError::InvalidInput { path } => {
                format!("Invalid input directory: {}", path)
            }
            LineTallyError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            LineTallyError::Pattern { pattern, .. } => {
                format!("Invalid file pattern: {}", pattern)
            }
            LineTallyError::Archive { path, message } => {
                format!("Archive extraction failed for {}: {}", path, message)
            }
            LineTallyError::Report { message } => {
                format!("Report write failed: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            LineTallyError::InvalidInput { .. } => Some(
                "Pass input=<directory> pointing at an existing directory.".to_string(),
            ),
            LineTallyError::Config { .. } => Some(
                "Check the key=value parameters and the TOML configuration file for typos."
                    .to_string(),
            ),
            LineTallyError::Pattern { .. } => Some(
                "fileformat accepts glob patterns such as *.txt, *.csv or *.zip.".to_string(),
            ),
            LineTallyError::Archive { .. } => Some(
                "Verify the matched files are valid zip archives, or narrow fileformat so it \
                 no longer selects archives."
                    .to_string(),
            ),
            LineTallyError::Report { .. } => Some(
                "Ensure the output path is writable and its parent directory exists.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<csv::Error> for LineTallyError {
    fn from(error: csv::Error) -> Self {
        LineTallyError::Report {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for LineTallyError {
    fn from(error: toml::de::Error) -> Self {
        LineTallyError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LineTallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = LineTallyError::InvalidInput {
            path: "/does/not/exist".to_string(),
        };
        assert!(error.user_message().contains("Invalid input directory"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_pattern_error_names_pattern() {
        let source = globset::Glob::new("a[").unwrap_err();
        let error = LineTallyError::Pattern {
            pattern: "a[".to_string(),
            source,
        };
        assert!(error.user_message().contains("a["));
        assert!(error.suggestion().unwrap().contains("fileformat"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = LineTallyError::from(io_error);
        assert!(matches!(error, LineTallyError::Io(_)));
        assert!(error.suggestion().is_none());
    }
}
