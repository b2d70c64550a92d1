//! CLI argument definitions shared by the three tools.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

/// Options every tool accepts.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Input text files, processed in the order given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Report path (default: the tool's fixed file name in the current directory).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a per-file processing summary to stderr after the report.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "compute-statistics",
    version,
    about = "Descriptive statistics (count, mean, median, mode, SD, variance) per input file",
    long_about = "Read one real number per line from each FILE and compute count, mean, median,\n\
                  mode, population standard deviation and population variance.\n\n\
                  Results for all files are written as one table to StatisticsResults.txt."
)]
pub struct StatisticsCli {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "convert-numbers",
    version,
    about = "Convert integer lines to binary and hexadecimal",
    long_about = "Read one integer per line from each FILE and write its binary and\n\
                  hexadecimal representation to ConvertionResults.txt."
)]
pub struct ConversionCli {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "word-count",
    version,
    about = "Count word frequencies per input file",
    long_about = "Count how often each word occurs in each FILE. Words are lowercased and\n\
                  stripped of non-alphabetic characters.\n\n\
                  Results are written to word_count_results.txt."
)]
pub struct WordCountCli {
    #[command(flatten)]
    pub args: CommonArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Build logging configuration from CLI flags with consistent precedence.
pub fn log_config_from_args(args: &CommonArgs) -> LogConfig {
    let mut config = LogConfig {
        level_filter: args.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(args.verbosity.is_present() || args.log_level.is_some());
    if let Some(level) = args.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match args.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = args.log_file.clone();
    config.with_timestamps = args.log_timestamps;
    config.with_ansi = match args.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => args.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_in_order() {
        let cli = StatisticsCli::try_parse_from(["compute-statistics", "b.txt", "a.txt"]).unwrap();
        assert_eq!(
            cli.args.files,
            vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]
        );
        assert!(cli.args.output.is_none());
        assert!(!cli.args.summary);
    }

    #[test]
    fn no_files_is_not_a_parse_error() {
        let cli = WordCountCli::try_parse_from(["word-count"]).unwrap();
        assert!(cli.args.files.is_empty());
    }

    #[test]
    fn default_log_config_uses_env_filter_at_warn() {
        let cli = ConversionCli::try_parse_from(["convert-numbers", "n.txt"]).unwrap();
        let config = log_config_from_args(&cli.args);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.with_timestamps);
    }

    #[test]
    fn log_timestamps_flag_enables_timestamps() {
        let cli =
            WordCountCli::try_parse_from(["word-count", "--log-timestamps", "t.txt"]).unwrap();
        assert!(log_config_from_args(&cli.args).with_timestamps);
    }

    #[test]
    fn explicit_log_level_overrides_verbosity() {
        let cli = ConversionCli::try_parse_from([
            "convert-numbers",
            "-v",
            "--log-level",
            "error",
            "--log-format",
            "json",
            "n.txt",
        ])
        .unwrap();
        let config = log_config_from_args(&cli.args);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn verbose_flag_raises_level() {
        let cli = StatisticsCli::try_parse_from(["compute-statistics", "-vv", "x.txt"]).unwrap();
        let config = log_config_from_args(&cli.args);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn color_never_disables_ansi() {
        let cli =
            StatisticsCli::try_parse_from(["compute-statistics", "--color", "never", "x.txt"])
                .unwrap();
        assert!(!log_config_from_args(&cli.args).with_ansi);
    }

    #[test]
    fn output_override() {
        let cli = StatisticsCli::try_parse_from([
            "compute-statistics",
            "-o",
            "out/stats.txt",
            "--summary",
            "x.txt",
        ])
        .unwrap();
        assert_eq!(cli.args.output, Some(PathBuf::from("out/stats.txt")));
        assert!(cli.args.summary);
    }
}
