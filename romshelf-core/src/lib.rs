//! Data model shared by the romshelf crates.
//!
//! A [`System`] is one platform directory with its launch configuration
//! and the [`Rom`]s that survived metadata filtering. Both are built once
//! during discovery and never mutated afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

pub mod error;
pub mod ids;
pub mod media;

pub use error::ShelfError;
pub use media::{PlatformArt, RomArt};

/// One emulated platform, read from a system directory.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    /// `hash_id(name)`
    pub id: String,
    pub name: String,
    /// Platform description
    pub plot: String,
    /// Executable or script used to launch ROMs
    pub application: String,
    /// Launch argument template
    pub args: String,
    /// Accepted ROM extensions, without the leading dot, in display order
    pub romext: Vec<String>,
    pub poster: Option<PathBuf>,
    pub icon: Option<PathBuf>,
    pub fanart: Option<PathBuf>,
    /// The system directory itself
    pub path: PathBuf,
    /// Directory holding the ROM files
    pub rompath: PathBuf,
    pub roms: Vec<Rom>,
}

impl System {
    /// Filesystem-safe category name used for the ROM database file.
    pub fn category_name(&self) -> String {
        ids::category_name(&self.name, &self.id)
    }

    /// Whether a file extension (without dot) is accepted for this platform.
    ///
    /// Matching is case-sensitive.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.romext.iter().any(|e| e == ext)
    }

    /// Platform artwork of the given kind, if found.
    pub fn art(&self, art: PlatformArt) -> Option<&Path> {
        match art {
            PlatformArt::Poster => self.poster.as_deref(),
            PlatformArt::Icon => self.icon.as_deref(),
            PlatformArt::Fanart => self.fanart.as_deref(),
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Roms)", self.name, self.roms.len())
    }
}

/// One playable game file belonging to a [`System`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rom {
    /// `hash_id(base_name)`
    pub id: String,
    /// Display name; the base file name when the metadata name is blank
    pub name: String,
    pub desc: String,
    pub rom_path: PathBuf,
    pub boxart_path: Option<PathBuf>,
    pub fanart_path: Option<PathBuf>,
    /// Value of `add_to_lib` from the ROM metadata
    pub included: bool,
}

impl Rom {
    /// ROM artwork of the given kind, if found.
    pub fn art(&self, art: RomArt) -> Option<&Path> {
        match art {
            RomArt::BoxFront => self.boxart_path.as_deref(),
            RomArt::Fanart => self.fanart_path.as_deref(),
        }
    }
}

impl fmt::Display for Rom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Render an optional path as a string, empty when absent.
pub fn path_text(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

/// File name without its last extension, as used for ROM identifiers.
pub fn base_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Last extension of a file name without the leading dot.
pub fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
