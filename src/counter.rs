use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

/// Count newline-delimited reads until end of stream. A trailing chunk
/// without a terminator still counts as a line; an empty file counts zero.
/// Counting is byte-based, so files with invalid UTF-8 are still measured.
pub fn count_lines(path: &Path) -> Result<u64> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut total = 0u64;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        total += 1;
    }

    Ok(total)
}

#[derive(Debug, Clone)]
pub struct CountProgress {
    pub files_processed: usize,
    pub rows_written: usize,
    pub total_lines: u64,
    pub current_file: Option<String>,
    pub start_time: Instant,
}

impl CountProgress {
    pub fn new() -> Self {
        Self {
            files_processed: 0,
            rows_written: 0,
            total_lines: 0,
            current_file: None,
            start_time: Instant::now(),
        }
    }

    pub fn record_row(&mut self, lines: u64) {
        self.rows_written += 1;
        self.total_lines += lines;
    }

    pub fn record_file(&mut self, filename: String) {
        self.files_processed += 1;
        self.current_file = Some(filename);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for CountProgress {
    fn default() -> Self {
        Self::new()
    }
}
