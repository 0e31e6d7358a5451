//! Discovery pass over a library root.
//!
//! Every subdirectory of the root is a candidate system directory:
//!
//! ```text
//! root/
//!   atari2600/
//!     platform.json
//!     platform_poster.png
//!     roms/
//!       pitfall.bin
//!     media/
//!       json/pitfall.json
//!       box2dfront/pitfall.png
//!       fanart/pitfall.jpg
//! ```
//!
//! Entries are visited in file-name order so that repeated runs over the
//! same tree produce the same output.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use romshelf_core::media::{find_platform_art, find_rom_art};
use romshelf_core::{PlatformArt, Rom, RomArt, ShelfError, System, ids};

use crate::descriptor::{load_platform, load_rom_metadata, rom_metadata_path};

/// Name of the ROM folder inside a system directory.
pub const ROMS_DIR: &str = "roms";

/// A system directory that was left out of the run.
#[derive(Debug)]
pub struct SkippedSystem {
    /// Directory name under the library root
    pub dir_name: String,
    pub reason: ShelfError,
}

/// Result of scanning a library root.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub systems: Vec<System>,
    pub skipped: Vec<SkippedSystem>,
}

impl ScanOutcome {
    /// Total number of ROMs across all systems.
    pub fn rom_count(&self) -> usize {
        self.systems.iter().map(|s| s.roms.len()).sum()
    }
}

/// Scan every subdirectory of `root` for systems.
///
/// Directories without a descriptor or a ROM folder are recorded in
/// [`ScanOutcome::skipped`]. Fatal errors (malformed JSON, unreadable
/// directories) abort the scan.
pub fn scan_library(root: &Path) -> Result<ScanOutcome, ShelfError> {
    let mut outcome = ScanOutcome::default();

    for path in sorted_entries(root)? {
        if !path.is_dir() {
            continue;
        }
        let dir_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match load_system(&path) {
            Ok(system) => {
                log::debug!("Loaded {} from {}", system, path.display());
                outcome.systems.push(system);
            }
            Err(e) if e.is_skippable() => {
                outcome.skipped.push(SkippedSystem {
                    dir_name,
                    reason: e,
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcome)
}

/// Build a [`System`] from one system directory, including its ROMs.
pub fn load_system(system_dir: &Path) -> Result<System, ShelfError> {
    let platform = load_platform(system_dir)?;
    let rompath = system_dir.join(ROMS_DIR);

    let mut system = System {
        id: ids::hash_id(&platform.name),
        name: platform.name,
        plot: platform.desc,
        application: platform.application,
        args: platform.args,
        romext: platform.romext,
        poster: find_platform_art(system_dir, PlatformArt::Poster),
        icon: find_platform_art(system_dir, PlatformArt::Icon),
        fanart: find_platform_art(system_dir, PlatformArt::Fanart),
        path: system_dir.to_path_buf(),
        rompath,
        roms: Vec::new(),
    };
    system.roms = find_roms(&system)?;

    Ok(system)
}

/// Enumerate the ROM files of a system that pass extension and metadata
/// filtering.
pub fn find_roms(system: &System) -> Result<Vec<Rom>, ShelfError> {
    let entries = match sorted_entries(&system.rompath) {
        Ok(entries) => entries,
        Err(ShelfError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            return Err(ShelfError::MissingRomDir(system.rompath.clone()));
        }
        Err(e) => return Err(e),
    };

    let mut roms = Vec::new();
    for path in entries {
        if !path.is_file() {
            continue;
        }
        let accepted =
            romshelf_core::extension(&path).is_some_and(|ext| system.accepts_extension(ext));
        if !accepted {
            continue;
        }
        if let Some(rom) = load_rom(&system.path, &path)? {
            roms.push(rom);
        }
    }

    Ok(roms)
}

/// Build a [`Rom`] for one ROM file.
///
/// Returns `Ok(None)` when the ROM has no metadata file or its metadata
/// opts it out with `add_to_lib` set to `false` or `null`.
pub fn load_rom(system_dir: &Path, rom_path: &Path) -> Result<Option<Rom>, ShelfError> {
    let Some(base_name) = romshelf_core::base_name(rom_path) else {
        log::debug!("Skipping ROM with non UTF-8 name: {}", rom_path.display());
        return Ok(None);
    };

    let Some(meta) = load_rom_metadata(system_dir, base_name)? else {
        log::warn!(
            "ROM metadata missing: {}",
            rom_metadata_path(system_dir, base_name).display()
        );
        return Ok(None);
    };

    let included = meta.included();
    if !included {
        log::debug!("ROM excluded by metadata: {}", rom_path.display());
        return Ok(None);
    }

    let name = if meta.name.is_empty() {
        base_name.to_string()
    } else {
        meta.name
    };

    Ok(Some(Rom {
        id: ids::hash_id(base_name),
        name,
        desc: meta.desc,
        rom_path: rom_path.to_path_buf(),
        boxart_path: find_rom_art(system_dir, base_name, RomArt::BoxFront),
        fanart_path: find_rom_art(system_dir, base_name, RomArt::Fanart),
        included,
    }))
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, ShelfError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| ShelfError::io(dir, e))?
        .flatten()
        .map(|e| e.path())
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
