//! Tool execution: collect, render, echo and write.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Command;
use tally_core::{
    Aggregator, ConversionAggregator, StatisticsAggregator, WordCountAggregator, collect_files,
};
use tally_model::{FileStatus, RunSummary};
use tally_report::{
    CONVERSION_REPORT_FILE, STATISTICS_REPORT_FILE, WORD_COUNT_REPORT_FILE, emit_report,
    render_conversion_report, render_statistics_report, render_word_count_report,
};
use tracing::info_span;

use crate::cli::{CommonArgs, log_config_from_args};
use crate::logging::init_logging;
use crate::summary::print_summary;

/// The three tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Statistics,
    Conversion,
    WordCount,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Statistics => "compute-statistics",
            Tool::Conversion => "convert-numbers",
            Tool::WordCount => "word-count",
        }
    }

    /// Report file written when `--output` is not given.
    pub fn default_report_file(self) -> &'static str {
        match self {
            Tool::Statistics => STATISTICS_REPORT_FILE,
            Tool::Conversion => CONVERSION_REPORT_FILE,
            Tool::WordCount => WORD_COUNT_REPORT_FILE,
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub files: Vec<PathBuf>,
    pub output: PathBuf,
    pub summary: bool,
}

impl RunOptions {
    pub fn from_args(tool: Tool, args: &CommonArgs) -> Self {
        Self {
            files: args.files.clone(),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(tool.default_report_file())),
            summary: args.summary,
        }
    }
}

/// Per-file overview independent of the tool's payload.
#[derive(Debug, Clone)]
pub struct FileOverview {
    pub label: String,
    pub status: FileStatus,
    pub valid_count: usize,
    pub errors: Vec<String>,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct ToolResult {
    pub tool: Tool,
    pub report_path: PathBuf,
    /// Number of lines in the written report.
    pub report_lines: usize,
    pub files: Vec<FileOverview>,
    pub elapsed: Duration,
}

/// Runs `tool` over the input files, echoing the report to `console`.
///
/// # Errors
///
/// Fails when the report cannot be written; the echo has already happened by then.
pub fn run_tool<W: Write>(tool: Tool, options: &RunOptions, console: &mut W) -> Result<ToolResult> {
    let span = info_span!("run", tool = tool.name(), files = options.files.len());
    let _guard = span.enter();
    match tool {
        Tool::Statistics => execute(
            tool,
            &StatisticsAggregator,
            render_statistics_report,
            options,
            console,
        ),
        Tool::Conversion => execute(
            tool,
            &ConversionAggregator,
            render_conversion_report,
            options,
            console,
        ),
        Tool::WordCount => execute(
            tool,
            &WordCountAggregator,
            render_word_count_report,
            options,
            console,
        ),
    }
}

fn execute<A, W>(
    tool: Tool,
    aggregator: &A,
    render: fn(&RunSummary<A::Output>) -> Vec<String>,
    options: &RunOptions,
    console: &mut W,
) -> Result<ToolResult>
where
    A: Aggregator,
    W: Write,
{
    let run = collect_files(aggregator, options.files.as_slice());
    let lines = render(&run);
    emit_report(&lines, &options.output, console)
        .with_context(|| format!("{} could not save its results", tool.name()))?;
    Ok(ToolResult {
        tool,
        report_path: options.output.clone(),
        report_lines: lines.len(),
        files: overview(&run),
        elapsed: run.elapsed,
    })
}

fn overview<T>(run: &RunSummary<T>) -> Vec<FileOverview> {
    run.files
        .iter()
        .map(|file| FileOverview {
            label: file.label.clone(),
            status: file.status,
            valid_count: file.valid_count,
            errors: file.errors.clone(),
            elapsed: file.elapsed,
        })
        .collect()
}

/// Entry point shared by the three binaries; returns the process exit code.
pub fn run_cli(tool: Tool, args: &CommonArgs, command: &mut Command) -> i32 {
    args.color.write_global();
    if args.files.is_empty() {
        println!("{}", command.render_usage());
        return 1;
    }
    let log_config = log_config_from_args(args);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return 1;
    }

    let options = RunOptions::from_args(tool, args);
    let outcome = run_tool(tool, &options, &mut io::stdout().lock());
    match outcome {
        Ok(result) => {
            if options.summary {
                print_summary(&result);
            }
            println!();
            println!(
                "Los resultados se han guardado en: {}",
                result.report_path.display()
            );
            0
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    }
}
