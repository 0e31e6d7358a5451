//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use romshelf_lib::CheckMode;

#[derive(Parser, Debug)]
#[command(name = "romshelf")]
#[command(
    about = "Build Advanced Emulator Launcher catalogs from a ROM library",
    long_about = None
)]
pub(crate) struct Cli {
    /// Library root containing one folder per system
    #[arg(long)]
    pub input: PathBuf,

    /// Directory receiving categories.xml and db_ROMs/
    #[arg(long)]
    pub output: PathBuf,

    /// Report systems and ROMs with missing metadata
    #[arg(long)]
    pub check: bool,

    /// Report every system and ROM, including complete ones
    #[arg(long)]
    pub verbose: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, conflicts_with_all = ["check", "verbose"])]
    pub quiet: bool,

    /// Enable debug logging (timestamps + debug-level messages)
    #[arg(long)]
    pub debug: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}

impl Cli {
    pub fn check_mode(&self) -> CheckMode {
        CheckMode::from_flags(self.check, self.verbose)
    }
}
