//! `compute-statistics`: descriptive statistics over numeric lines.

use clap::{CommandFactory, Parser};
use tally_cli::Tool;
use tally_cli::cli::StatisticsCli;

fn main() {
    let cli = StatisticsCli::parse();
    let exit_code = tally_cli::run_cli(Tool::Statistics, &cli.args, &mut StatisticsCli::command());
    std::process::exit(exit_code);
}
