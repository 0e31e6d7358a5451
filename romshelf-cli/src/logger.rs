//! Console logger behind the `log` facade.
//!
//! `info` goes to stdout undecorated so reports read like plain program
//! output; `warn` and `error` go to stderr with a coloured prefix. With
//! `--debug`, debug records from the romshelf crates are shown with a
//! local timestamp. Every emitted line can also be appended to a log file
//! with ANSI codes stripped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use crate::CliError;

struct CliLogger {
    quiet: bool,
    debug: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record<'_>) -> String {
        match record.level() {
            Level::Error => format!(
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                record.args()
            ),
            Level::Warn => format!(
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                record.args()
            ),
            Level::Info => record.args().to_string(),
            Level::Debug | Level::Trace => format!(
                "{} {}",
                chrono::Local::now()
                    .format("%H:%M:%S%.3f")
                    .if_supports_color(Stdout, |t| t.dimmed()),
                record.args()
            ),
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        match metadata.level() {
            Level::Error | Level::Warn => true,
            Level::Info => !self.quiet,
            Level::Debug => self.debug && metadata.target().starts_with("romshelf"),
            Level::Trace => false,
        }
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        match record.level() {
            Level::Error | Level::Warn => eprintln!("{}", line),
            _ => println!("{}", line),
        }

        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the CLI logger. Must be called once, before any logging.
pub(crate) fn init(quiet: bool, debug: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let logfile = match logfile {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::logging(format!("cannot open {}: {}", path.display(), e))
                })?;
            Some(Mutex::new(file))
        }
        None => None,
    };

    let max_level = if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    log::set_boxed_logger(Box::new(CliLogger {
        quiet,
        debug,
        logfile,
    }))
    .map_err(|e| CliError::logging(e.to_string()))?;
    log::set_max_level(max_level);

    Ok(())
}
