//! JSON descriptors authored next to the ROM files.
//!
//! Each system directory carries a `platform.json`, and each ROM a
//! `media/json/<base>.json` metadata file. A missing platform descriptor
//! is reported as a skippable error; a missing ROM metadata file is not an
//! error at all. Anything that exists but does not parse is fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use romshelf_core::ShelfError;

/// File name of the platform descriptor inside a system directory.
pub const PLATFORM_FILE: &str = "platform.json";

/// Location of ROM metadata files relative to the system directory.
pub const ROM_METADATA_DIR: &str = "media/json";

/// Platform record read from `platform.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformDescriptor {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
    #[serde(default, deserialize_with = "nullable")]
    pub application: String,
    #[serde(default, deserialize_with = "nullable")]
    pub args: String,
    #[serde(default, deserialize_with = "nullable")]
    pub romext: Vec<String>,
}

/// Per-ROM record read from `media/json/<base>.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RomMetadata {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
    /// `true` when the key is absent; an explicit `null` excludes the ROM.
    #[serde(default = "included_by_default", deserialize_with = "nullable")]
    pub add_to_lib: bool,
}

impl RomMetadata {
    pub fn included(&self) -> bool {
        self.add_to_lib
    }
}

fn included_by_default() -> bool {
    true
}

/// Treat an explicit `null` the same as an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Path of the platform descriptor for a system directory.
pub fn platform_path(system_dir: &Path) -> PathBuf {
    system_dir.join(PLATFORM_FILE)
}

/// Path of the metadata file for the ROM with the given base name.
pub fn rom_metadata_path(system_dir: &Path, rom_base_name: &str) -> PathBuf {
    system_dir
        .join(ROM_METADATA_DIR)
        .join(format!("{}.json", rom_base_name))
}

/// Load `platform.json` from a system directory.
pub fn load_platform(system_dir: &Path) -> Result<PlatformDescriptor, ShelfError> {
    let path = platform_path(system_dir);
    match read_json(&path)? {
        Some(descriptor) => Ok(descriptor),
        None => Err(ShelfError::MissingDescriptor(path)),
    }
}

/// Load the metadata for one ROM, `Ok(None)` when no metadata file exists.
pub fn load_rom_metadata(
    system_dir: &Path,
    rom_base_name: &str,
) -> Result<Option<RomMetadata>, ShelfError> {
    read_json(&rom_metadata_path(system_dir, rom_base_name))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ShelfError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ShelfError::io(path, e)),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| ShelfError::malformed(path, e))
}

#[cfg(test)]
#[path = "tests/descriptor_tests.rs"]
mod tests;
