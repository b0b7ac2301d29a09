pub mod archive;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod report;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, RawParams};
pub use config::{Config, OutputConfig, ParamOverrides, ScanConfig};
pub use error::{LineTallyError, Result, UserFriendlyError};

// Core functionality re-exports
pub use archive::{extract_beside, ExtractedArchive};
pub use counter::{count_lines, CountProgress};
pub use report::{ReportWriter, RunReport};
pub use scanner::{folder_label, FileScanner, MatchedFile, NamePattern};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use chrono::Utc;
use std::path::Path;
use std::time::Instant;

/// Main library interface for LineTally functionality
pub struct LineTally {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl LineTally {
    /// Create a new LineTally instance with the provided configuration
    pub fn new(config: Config) -> Self {
        let mode = OutputMode::from_string(&config.output.format);
        let output_formatter = OutputFormatter::new(mode, config.output.verbose, config.output.quiet);
        let progress_manager =
            ProgressManager::new(!config.output.quiet && mode == OutputMode::Human);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Count lines of every matching file under `input` and write the
    /// tab-separated report.
    pub fn count_directory(&self, input: &Path) -> Result<RunReport> {
        let started = Instant::now();

        if !input.is_dir() {
            return Err(LineTallyError::InvalidInput {
                path: input.display().to_string(),
            });
        }

        self.output_formatter
            .start_operation("Scanning for matching files");

        let scanner = FileScanner::new(&self.config.scan)?;
        let archive_mode = scanner.pattern().is_archive();
        let matched = scanner.scan(input)?;

        self.output_formatter
            .info(&format!("Matched {} files", matched.len()));
        if matched.is_empty() {
            self.output_formatter.warning(&format!(
                "No files under {} match pattern {}",
                input.display(),
                scanner.pattern().as_str()
            ));
        }

        let output_path = self.config.output.resolved_path();
        let mut writer = ReportWriter::create(&output_path)?;
        let mut progress = CountProgress::new();

        let bar = self.progress_manager.create_count_progress(matched.len() as u64);
        for file in &matched {
            bar.set_message(file.filename.clone());

            if archive_mode {
                self.count_archive(file, &mut writer, &mut progress)?;
            } else {
                let lines = count_lines(&file.path)?;
                writer.write_row(&file.filename, lines, &file.folder)?;
                progress.record_row(lines);
            }

            progress.record_file(file.filename.clone());
            bar.inc(1);
        }
        writer.finish()?;

        ui::finish_progress_with_summary(
            &bar,
            &format!("Counted {} files", progress.files_processed),
            progress.elapsed(),
        );
        self.output_formatter
            .success(&format!("Report written to {}", output_path.display()));

        Ok(RunReport {
            input: input.to_path_buf(),
            output: output_path,
            pattern: scanner.pattern().as_str().to_string(),
            recursive: self.config.scan.recurse,
            archive_mode,
            files_matched: matched.len(),
            rows_written: progress.rows_written,
            total_lines: progress.total_lines,
            duration: started.elapsed(),
            completed_at: Utc::now(),
        })
    }

    /// Extract an archive beside itself and report each top-level entry
    /// under the archive's own name and folder.
    fn count_archive(
        &self,
        file: &MatchedFile,
        writer: &mut ReportWriter,
        progress: &mut CountProgress,
    ) -> Result<()> {
        let extracted = extract_beside(&file.path)?;
        self.output_formatter.debug(&format!(
            "Extracted {} into {}",
            file.filename,
            extracted.dir().display()
        ));

        for entry in extracted.files()? {
            let lines = count_lines(&entry)?;
            writer.write_row(&file.filename, lines, &file.folder)?;
            progress.record_row(lines);
        }

        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &LineTallyError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn quiet_config(output: PathBuf) -> Config {
        let mut config = Config::default();
        config.output.path = Some(output);
        config.output.quiet = true;
        config
    }

    fn seed_scenario(root: &Path) {
        fs::write(root.join("a.txt"), "one\ntwo\n").unwrap();
        fs::write(root.join("b.txt"), "").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("c.txt"), "only\n").unwrap();
    }

    #[test]
    fn test_top_level_report() {
        let temp_dir = TempDir::new().unwrap();
        seed_scenario(temp_dir.path());
        let out = temp_dir.path().join("out.csv");

        let tally = LineTally::new(quiet_config(out.clone()));
        let report = tally.count_directory(temp_dir.path()).unwrap();

        assert_eq!(report.files_matched, 2);
        assert_eq!(report.rows_written, 2);
        assert_eq!(report.total_lines, 2);
        assert!(!report.archive_mode);

        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "FILE\tLINES\tFOLDER");
        assert!(lines[1].starts_with("a.txt\t2\t"));
        assert!(lines[2].starts_with("b.txt\t0\t"));
    }

    #[test]
    fn test_recursive_report_includes_subfolder() {
        let temp_dir = TempDir::new().unwrap();
        seed_scenario(temp_dir.path());
        let out = temp_dir.path().join("out.csv");

        let mut config = quiet_config(out.clone());
        config.scan.recurse = true;
        let tally = LineTally::new(config);
        let report = tally.count_directory(temp_dir.path()).unwrap();

        assert_eq!(report.rows_written, 3);

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content.lines().count(), 4);
        assert!(content.contains("c.txt\t1\tsub"));
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out.csv");

        let tally = LineTally::new(quiet_config(out.clone()));
        let result = tally.count_directory(&temp_dir.path().join("absent"));

        assert!(matches!(result, Err(LineTallyError::InvalidInput { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn test_empty_match_still_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("only.csv"), "x\n").unwrap();
        let out = temp_dir.path().join("out.csv");

        let tally = LineTally::new(quiet_config(out.clone()));
        let report = tally.count_directory(temp_dir.path()).unwrap();

        assert_eq!(report.rows_written, 0);
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "FILE\tLINES\tFOLDER\n");
    }

    #[test]
    fn test_archive_rows_carry_archive_name() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("drops");
        fs::create_dir(&data_dir).unwrap();

        let archive_path = data_dir.join("bundle.zip");
        let file = fs::File::create(&archive_path).unwrap();
        let mut zw = zip::write::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        zw.start_file("first.txt", options).unwrap();
        zw.write_all(b"one\ntwo\nthree").unwrap();
        zw.start_file("second.txt", options).unwrap();
        zw.write_all(b"alpha\n").unwrap();
        zw.finish().unwrap();

        let out = temp_dir.path().join("out.csv");
        let mut config = quiet_config(out.clone());
        config.scan.pattern = "*.zip".to_string();
        let tally = LineTally::new(config);
        let report = tally.count_directory(&data_dir).unwrap();

        assert!(report.archive_mode);
        assert_eq!(report.files_matched, 1);
        assert_eq!(report.rows_written, 2);

        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        // Both rows name the archive and its folder, not the entries
        assert_eq!(lines[1], "bundle.zip\t3\tdrops");
        assert_eq!(lines[2], "bundle.zip\t1\tdrops");

        // Extraction directory is gone once the run finishes
        assert!(!data_dir.join("bundle.zip_tmp").exists());
    }

    #[test]
    fn test_archive_failure_cleans_up_and_keeps_partial_report() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("drops");
        fs::create_dir(&data_dir).unwrap();
        fs::write(data_dir.join("broken.zip"), b"not an archive").unwrap();

        let out = temp_dir.path().join("out.csv");
        let mut config = quiet_config(out.clone());
        config.scan.pattern = "*.zip".to_string();
        let tally = LineTally::new(config);

        let result = tally.count_directory(&data_dir);
        assert!(matches!(result, Err(LineTallyError::Archive { .. })));
        assert!(!data_dir.join("broken.zip_tmp").exists());

        // Header was already flushed before the failure
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "FILE\tLINES\tFOLDER\n");
    }
}
