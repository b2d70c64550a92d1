//! `word-count`: word frequencies of text files.

use clap::{CommandFactory, Parser};
use tally_cli::Tool;
use tally_cli::cli::WordCountCli;

fn main() {
    let cli = WordCountCli::parse();
    let exit_code = tally_cli::run_cli(Tool::WordCount, &cli.args, &mut WordCountCli::command());
    std::process::exit(exit_code);
}
