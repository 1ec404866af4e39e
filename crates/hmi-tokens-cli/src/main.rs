//! Border radius token inspector.

use clap::Parser;
use hmi_tokens_cli::logging::init_logging;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_audit, run_export, run_get, run_list};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::List(args) => run_list(args).map(|()| false),
        Command::Get(args) => run_get(args).map(|()| false),
        Command::Audit(args) => run_audit(args),
        Command::Export(args) => run_export(args).map(|()| false),
    };
    let exit_code = match result {
        Ok(failed) => i32::from(failed),
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
