//! romshelf CLI
//!
//! Builds Advanced Emulator Launcher catalogs from a directory of systems.

mod cli_types;
mod commands;
mod error;
mod logger;
mod report;

use clap::Parser;

use romshelf_lib::BuildOptions;

use cli_types::Cli;
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.debug, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let options = BuildOptions::new().check(cli.check_mode());
    if let Err(e) = commands::build::run_build(&cli.input, &cli.output, &options) {
        log::error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}
