//! Multi-file collection.
//!
//! The three tools share one shape: read a file line by line, parse each line,
//! reduce the parsed values into a per-file result. [`Aggregator`] captures the
//! tool-specific parts; [`collect_files`] runs an aggregator over every input
//! path in order and never aborts because of a single bad file or line.

use std::path::Path;
use std::time::Instant;

use tally_ingest::{IngestOptions, LabelStyle, ParsedLine, read_parsed_lines};
use tally_model::{FileStatus, FileSummary, RunSummary};
use tracing::{debug, info, info_span, warn};

/// Tool-specific parsing and reduction.
///
/// # Example
///
/// ```ignore
/// struct LineLengths;
///
/// impl Aggregator for LineLengths {
///     type Value = usize;
///     type Output = Vec<usize>;
///
///     fn name(&self) -> &'static str {
///         "line-lengths"
///     }
///
///     fn label_style(&self) -> LabelStyle {
///         LabelStyle::Path
///     }
///
///     fn parse_line(&self, line: &str) -> Result<usize, String> {
///         Ok(line.len())
///     }
///
///     fn aggregate(&self, lines: Vec<ParsedLine<usize>>) -> Vec<usize> {
///         lines.into_iter().map(|line| line.value).collect()
///     }
/// }
/// ```
pub trait Aggregator {
    type Value;
    type Output;

    /// Short tool name used in log records.
    fn name(&self) -> &'static str;

    /// How the report names each input file.
    fn label_style(&self) -> LabelStyle;

    fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default()
    }

    /// Parses one trimmed line. An `Err` carries the reason the line was rejected.
    fn parse_line(&self, line: &str) -> Result<Self::Value, String>;

    /// Reduces the accepted lines of one file, in line order.
    fn aggregate(&self, lines: Vec<ParsedLine<Self::Value>>) -> Self::Output;

    /// Number of valid data points reported for a file.
    fn data_points(&self, _output: &Self::Output, parsed_lines: usize) -> usize {
        parsed_lines
    }
}

/// Reads and aggregates one file.
///
/// A missing or unreadable file yields a summary without a result and with a
/// single file-level error.
pub fn collect_file<A: Aggregator>(aggregator: &A, path: &Path) -> FileSummary<A::Output> {
    let span = info_span!("file", tool = aggregator.name(), path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let label = aggregator.label_style().apply(path);

    let report = match read_parsed_lines(path, &aggregator.ingest_options(), |line| {
        aggregator.parse_line(line)
    }) {
        Ok(report) => report,
        Err(error) => {
            let status = if error.is_not_found() {
                FileStatus::Missing
            } else {
                FileStatus::Unreadable
            };
            warn!(status = %status, "{error}; skipping file");
            return FileSummary::unavailable(
                path.to_path_buf(),
                label,
                status,
                error.to_string(),
                start.elapsed(),
            );
        }
    };

    let parsed_lines = report.values.len();
    let errors = report.issues.iter().map(ToString::to_string).collect();
    let output = aggregator.aggregate(report.values);
    let valid_count = aggregator.data_points(&output, parsed_lines);
    let elapsed = start.elapsed();
    debug!(
        valid = valid_count,
        rejected = report.issues.len(),
        elapsed_us = elapsed.as_micros(),
        "file aggregated"
    );

    FileSummary {
        path: path.to_path_buf(),
        label,
        status: FileStatus::Processed,
        valid_count,
        result: Some(output),
        errors,
        elapsed,
    }
}

/// Runs `aggregator` over every path, in the given order.
pub fn collect_files<A, P>(aggregator: &A, paths: &[P]) -> RunSummary<A::Output>
where
    A: Aggregator,
    P: AsRef<Path>,
{
    let start = Instant::now();
    let files: Vec<FileSummary<A::Output>> = paths
        .iter()
        .map(|path| collect_file(aggregator, path.as_ref()))
        .collect();
    let run = RunSummary {
        files,
        elapsed: start.elapsed(),
    };
    info!(
        tool = aggregator.name(),
        files = run.files.len(),
        unavailable = run.missing_files().count(),
        valid = run.total_valid(),
        errors = run.total_errors(),
        elapsed_ms = run.elapsed.as_millis(),
        "run complete"
    );
    run
}
