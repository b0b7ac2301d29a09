use crate::config::{Config, ParamOverrides};
use crate::error::{LineTallyError, Result};
use clap::{CommandFactory, Parser};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linetally")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count lines of files in a directory and write a tab-separated report")]
#[command(
    long_about = "LineTally scans a directory for files matching a glob pattern, counts the \
                  lines of each match (extracting zip archives first when the pattern denotes \
                  them), and writes one tab-separated report row per file."
)]
#[command(after_help = "PARAMETERS (key=value tokens, any order, case-insensitive keys):\n  \
    input=DIR          directory to search for files (required)\n  \
    output=PATH        report destination (default: FileLineCounter_<UTC timestamp>.csv)\n  \
    fileformat=GLOB    file pattern such as *.txt, *.csv or *.zip (default: *.txt)\n  \
    searchoption=MODE  all: folders and subfolders; current: only the top directory\n  \
    config=PATH        TOML configuration file\n  \
    format=MODE        console output: human, json or plain\n  \
    verbose=LEVEL      console verbosity 0-2\n  \
    quiet=true         suppress non-essential console output\n  \
    help               print this manual\n\n\
    EXAMPLES:\n  \
    linetally input=/var/log fileformat=*.log searchoption=all\n  \
    linetally input=./drops fileformat=*.zip output=report.csv")]
pub struct Cli {
    /// Option tokens in key=value form; see the parameter list below
    #[arg(value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

impl Cli {
    pub fn print_usage() {
        Cli::command().print_help().ok();
    }
}

const KNOWN_KEYS: &[&str] = &[
    "input",
    "output",
    "fileformat",
    "searchoption",
    "help",
    "config",
    "format",
    "verbose",
    "quiet",
];

/// Resolved key=value tokens. Malformed and unknown tokens are dropped with
/// a warning; the first occurrence of a duplicate key wins.
#[derive(Debug, Default)]
pub struct RawParams {
    values: HashMap<String, String>,
    warnings: Vec<String>,
}

impl RawParams {
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::default();

        for token in tokens {
            let token = token.as_ref();
            let Some(pos) = token.find('=') else {
                params
                    .warnings
                    .push(format!("Ignored parameter: [{}]", token));
                continue;
            };
            if pos == 0 {
                params
                    .warnings
                    .push(format!("Ignored parameter: [{}]", token));
                continue;
            }

            let key = token[..pos].trim().to_lowercase();
            let value = token[pos + 1..].trim().to_string();

            if key.is_empty() {
                params
                    .warnings
                    .push(format!("Ignored parameter: [{}]", token));
                continue;
            }
            if !KNOWN_KEYS.contains(&key.as_str()) {
                params
                    .warnings
                    .push(format!("Unknown parameter key: [{}]", key));
                continue;
            }

            params.values.entry(key).or_insert(value);
        }

        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn input(&self) -> Option<PathBuf> {
        self.get("input").map(PathBuf::from)
    }

    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.get("config"))?;

        let overrides = self.to_overrides()?;
        config.merge_with_params(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn to_overrides(&self) -> Result<ParamOverrides> {
        let verbose = self
            .get("verbose")
            .map(|v| {
                v.parse::<u8>().map_err(|_| LineTallyError::Config {
                    message: format!("verbose must be a number between 0 and 2, got [{}]", v),
                })
            })
            .transpose()?;

        let quiet = self.get("quiet").map(parse_bool_value).transpose()?;

        // Only the literal "all" recurses; "current" or anything else stays
        // in the top directory.
        let recurse = self
            .get("searchoption")
            .map(|v| v.eq_ignore_ascii_case("all"));

        Ok(ParamOverrides::new()
            .with_pattern(self.get("fileformat").map(str::to_string))
            .with_recurse(recurse)
            .with_output_path(self.get("output").map(PathBuf::from))
            .with_format(self.get("format").map(str::to_string))
            .with_verbose(verbose)
            .with_quiet(quiet))
    }
}

fn parse_bool_value(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(LineTallyError::Config {
            message: format!("quiet must be true or false, got [{}]", other),
        }),
    }
}
