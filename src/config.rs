use crate::error::{LineTallyError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub pattern: String,
    pub recurse: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub format: String,
    pub verbose: u8,
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: "*.txt".to_string(),
            recurse: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None, // Timestamped name, resolved per run
            format: "human".to_string(),
            verbose: 0,
            quiet: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LineTallyError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| LineTallyError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| LineTallyError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = [
                    "linetally.toml",
                    "linetally.config.toml",
                    ".linetally.toml",
                ];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_params(&mut self, overrides: &ParamOverrides) {
        if let Some(ref pattern) = overrides.pattern {
            self.scan.pattern = pattern.clone();
        }

        if let Some(recurse) = overrides.recurse {
            self.scan.recurse = recurse;
        }

        if let Some(ref output_path) = overrides.output_path {
            self.output.path = Some(output_path.clone());
        }

        if let Some(ref format) = overrides.format {
            self.output.format = format.to_lowercase();
        }

        if let Some(verbose) = overrides.verbose {
            self.output.verbose = verbose;
        }

        if let Some(quiet) = overrides.quiet {
            self.output.quiet = quiet;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.pattern.trim().is_empty() {
            return Err(LineTallyError::Config {
                message: "fileformat pattern must not be empty".to_string(),
            });
        }

        if !matches!(self.output.format.as_str(), "human" | "json" | "plain") {
            return Err(LineTallyError::Config {
                message: format!(
                    "Unknown console format [{}]; expected human, json or plain",
                    self.output.format
                ),
            });
        }

        if self.output.verbose > 2 {
            return Err(LineTallyError::Config {
                message: format!(
                    "Verbosity level {} is out of range (0-2)",
                    self.output.verbose
                ),
            });
        }

        Ok(())
    }
}

impl OutputConfig {
    /// Destination for the report. Absent an explicit path, a timestamped
    /// name is generated at resolution time.
    pub fn resolved_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => PathBuf::from(default_report_name(Utc::now())),
        }
    }
}

pub fn default_report_name(now: DateTime<Utc>) -> String {
    format!("FileLineCounter_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

#[derive(Debug, Default)]
pub struct ParamOverrides {
    pub pattern: Option<String>,
    pub recurse: Option<bool>,
    pub output_path: Option<PathBuf>,
    pub format: Option<String>,
    pub verbose: Option<u8>,
    pub quiet: Option<bool>,
}

impl ParamOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: Option<String>) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_recurse(mut self, recurse: Option<bool>) -> Self {
        self.recurse = recurse;
        self
    }

    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn with_format(mut self, format: Option<String>) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: Option<u8>) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_quiet(mut self, quiet: Option<bool>) -> Self {
        self.quiet = quiet;
        self
    }
}
