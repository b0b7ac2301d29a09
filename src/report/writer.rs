use crate::error::{LineTallyError, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const REPORT_HEADER: [&str; 3] = ["FILE", "LINES", "FOLDER"];

/// Tab-separated report sink. The destination is truncated on open, the
/// header row goes out first, and rows are flushed as written so an
/// aborted run keeps the rows that made it out.
pub struct ReportWriter {
    writer: csv::Writer<BufWriter<File>>,
    path: PathBuf,
    rows_written: usize,
}

impl ReportWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| LineTallyError::Report {
            message: format!("cannot create {}: {}", path.display(), e),
        })?;

        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(BufWriter::new(file));

        writer.write_record(REPORT_HEADER)?;
        writer.flush()?;

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows_written: 0,
        })
    }

    pub fn write_row(&mut self, filename: &str, lines: u64, folder: &str) -> Result<()> {
        let lines = lines.to_string();
        self.writer.write_record([filename, lines.as_str(), folder])?;
        self.writer.flush()?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_header_and_rows_tab_separated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.write_row("a.txt", 2, "logs").unwrap();
        writer.write_row("b.txt", 0, "logs").unwrap();
        assert_eq!(writer.rows_written(), 2);
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, ["FILE\tLINES\tFOLDER", "a.txt\t2\tlogs", "b.txt\t0\tlogs"]);
    }

    #[test]
    fn test_existing_file_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");
        fs::write(&path, "stale content\nmore stale\n").unwrap();

        let writer = ReportWriter::create(&path).unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "FILE\tLINES\tFOLDER\n");
    }

    #[test]
    fn test_values_never_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.write_row("odd name.txt", 1, "dir with spaces").unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("odd name.txt\t1\tdir with spaces"));
        assert!(!content.contains('"'));
    }

    #[test]
    fn test_rows_survive_without_finish() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer.write_row("a.txt", 3, "d").unwrap();
        drop(writer);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("a.txt\t3\td"));
    }

    #[test]
    fn test_unwritable_destination_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.csv");
        let result = ReportWriter::create(&path);
        assert!(matches!(result, Err(LineTallyError::Report { .. })));
    }
}
