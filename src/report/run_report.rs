use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Final accounting for one run, printed as the console summary. In
/// archive mode `rows_written` can exceed `files_matched` because every
/// extracted entry produces its own row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
    pub recursive: bool,
    pub archive_mode: bool,
    pub files_matched: usize,
    pub rows_written: usize,
    pub total_lines: u64,
    pub duration: Duration,
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_json() {
        let report = RunReport {
            input: PathBuf::from("/data"),
            output: PathBuf::from("out.csv"),
            pattern: "*.txt".to_string(),
            recursive: false,
            archive_mode: false,
            files_matched: 2,
            rows_written: 2,
            total_lines: 7,
            duration: Duration::from_millis(12),
            completed_at: Utc::now(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"rows_written\":2"));
        assert!(json.contains("\"total_lines\":7"));
    }
}
