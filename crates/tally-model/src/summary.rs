//! Per-file and per-run processing summaries.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// How far processing of one input file got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The file was read to the end.
    Processed,
    /// The file does not exist.
    Missing,
    /// The file exists but could not be opened or read.
    Unreadable,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Processed => "processed",
            FileStatus::Missing => "missing",
            FileStatus::Unreadable => "unreadable",
        }
    }

    pub fn is_processed(self) -> bool {
        self == FileStatus::Processed
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line that was rejected by the tool's parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIssue {
    pub line_number: usize,
    /// Trimmed line content.
    pub raw: String,
    pub reason: String,
}

impl fmt::Display for LineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: invalid data '{}' ({})",
            self.line_number, self.raw, self.reason
        )
    }
}

/// Result of processing one input file.
#[derive(Debug, Clone)]
pub struct FileSummary<T> {
    pub path: PathBuf,
    /// Display name used by the report.
    pub label: String,
    pub status: FileStatus,
    /// Valid data points; the meaning is tool-specific (parsed lines, or words
    /// for word counting).
    pub valid_count: usize,
    /// Aggregated payload; `None` when the file could not be read.
    pub result: Option<T>,
    /// File-level and line-level diagnostics, in the order they occurred.
    pub errors: Vec<String>,
    pub elapsed: Duration,
}

impl<T> FileSummary<T> {
    /// Placeholder for a file that could not be opened.
    pub fn unavailable(
        path: PathBuf,
        label: String,
        status: FileStatus,
        error: String,
        elapsed: Duration,
    ) -> Self {
        Self {
            path,
            label,
            status,
            valid_count: 0,
            result: None,
            errors: vec![error],
            elapsed,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// All file summaries of one run, in command-line order.
#[derive(Debug, Clone)]
pub struct RunSummary<T> {
    pub files: Vec<FileSummary<T>>,
    /// Wall-clock time of the whole multi-file run.
    pub elapsed: Duration,
}

impl<T> RunSummary<T> {
    pub fn total_valid(&self) -> usize {
        self.files.iter().map(|file| file.valid_count).sum()
    }

    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|file| file.errors.len()).sum()
    }

    pub fn missing_files(&self) -> impl Iterator<Item = &FileSummary<T>> {
        self.files.iter().filter(|file| !file.status.is_processed())
    }
}
