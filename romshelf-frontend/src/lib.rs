pub mod ael;
pub mod error;

pub use ael::AelFrontend;
pub use error::FrontendError;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use romshelf_core::System;

/// Where and when a set of launcher files is written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Root directory receiving the catalog and ROM databases
    pub output_dir: PathBuf,
    /// Creation time stamped into the catalog
    pub timestamp: DateTime<Utc>,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Files produced by [`Frontend::write_all`].
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub catalog_path: PathBuf,
    pub rom_db_paths: Vec<PathBuf>,
    pub rom_count: usize,
}

/// Trait for game launcher front ends that consume the scanned library.
pub trait Frontend {
    fn name(&self) -> &'static str;

    /// Write the platform catalog for all systems, returning its path.
    fn write_catalog(
        &self,
        systems: &[System],
        options: &ExportOptions,
    ) -> Result<PathBuf, FrontendError>;

    /// Write the ROM database of one system, returning its path.
    fn write_rom_db(
        &self,
        system: &System,
        options: &ExportOptions,
    ) -> Result<PathBuf, FrontendError>;

    /// Write the catalog followed by every system's ROM database.
    fn write_all(
        &self,
        systems: &[System],
        options: &ExportOptions,
    ) -> Result<ExportSummary, FrontendError> {
        let catalog_path = self.write_catalog(systems, options)?;
        let rom_db_paths = systems
            .iter()
            .map(|system| self.write_rom_db(system, options))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExportSummary {
            catalog_path,
            rom_db_paths,
            rom_count: systems.iter().map(|s| s.roms.len()).sum(),
        })
    }
}

/// Render a directory path with a trailing separator.
pub(crate) fn dir_text(path: &Path) -> String {
    let mut text = path.display().to_string();
    if !text.ends_with(std::path::MAIN_SEPARATOR) {
        text.push(std::path::MAIN_SEPARATOR);
    }
    text
}
