//! `convert-numbers`: binary and hexadecimal conversion of integer lines.

use clap::{CommandFactory, Parser};
use tally_cli::Tool;
use tally_cli::cli::ConversionCli;

fn main() {
    let cli = ConversionCli::parse();
    let exit_code = tally_cli::run_cli(Tool::Conversion, &cli.args, &mut ConversionCli::command());
    std::process::exit(exit_code);
}
