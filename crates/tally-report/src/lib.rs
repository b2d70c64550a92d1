//! Report generation for the tally tools.
//!
//! Each renderer turns a [`tally_model::RunSummary`] into the exact lines of
//! one report file:
//!
//! - **Statistics**: tab-separated metric table, one column per file
//! - **Conversion**: tab-separated row per converted line, plus elapsed time
//! - **Word count**: one block per file, plus elapsed time
//!
//! [`emit_report`] echoes the lines to the console and writes them to disk.

mod conversion;
mod error;
mod format;
mod statistics;
mod words;
mod writer;

/// Default report file of `compute-statistics`.
pub const STATISTICS_REPORT_FILE: &str = "StatisticsResults.txt";
/// Default report file of `convert-numbers`.
pub const CONVERSION_REPORT_FILE: &str = "ConvertionResults.txt";
/// Default report file of `word-count`.
pub const WORD_COUNT_REPORT_FILE: &str = "word_count_results.txt";

pub use conversion::{CONVERSION_HEADER, render_conversion_report};
pub use error::{ReportError, Result};
pub use format::{NOT_AVAILABLE, format_float};
pub use statistics::render_statistics_report;
pub use words::{FILE_ERROR_LINE, render_word_count_report};
pub use writer::{emit_report, write_report};
