//! Advanced Emulator Launcher output.
//!
//! Produces `categories.xml` with one `<launcher>` per system and one
//! `db_ROMs/<category>.json` per system.

pub mod catalog;
pub mod rom_db;

use std::fs;
use std::path::PathBuf;

use romshelf_core::System;

use crate::{ExportOptions, Frontend, FrontendError};

pub use catalog::{CATALOG_FILE, LauncherRecord};
pub use rom_db::{ROM_DB_DIR, RomDatabase, RomRecord};

/// Advanced Emulator Launcher front end.
pub struct AelFrontend;

impl AelFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AelFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for AelFrontend {
    fn name(&self) -> &'static str {
        "Advanced Emulator Launcher"
    }

    fn write_catalog(
        &self,
        systems: &[System],
        options: &ExportOptions,
    ) -> Result<PathBuf, FrontendError> {
        fs::create_dir_all(&options.output_dir)?;

        let records: Vec<LauncherRecord> = systems
            .iter()
            .map(|system| LauncherRecord::from_system(system, options.timestamp))
            .collect();
        let xml = catalog::render_catalog(&records)?;

        let path = options.output_dir.join(CATALOG_FILE);
        fs::write(&path, xml)?;
        log::debug!("Wrote {} launchers to {}", records.len(), path.display());

        Ok(path)
    }

    fn write_rom_db(
        &self,
        system: &System,
        options: &ExportOptions,
    ) -> Result<PathBuf, FrontendError> {
        let dir = options.output_dir.join(ROM_DB_DIR);
        fs::create_dir_all(&dir)?;

        let db = RomDatabase::from_roms(&system.roms);
        let path = dir.join(format!("{}.json", system.category_name()));
        fs::write(&path, db.to_json()?)?;
        log::debug!("Wrote {} ROMs to {}", db.len(), path.display());

        Ok(path)
    }
}

#[cfg(test)]
#[path = "../tests/ael_tests.rs"]
mod tests;
