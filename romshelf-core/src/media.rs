//! Artwork lookup for platforms and ROMs.
//!
//! Artwork is only located, never opened: a path is reported if a file
//! with one of the known image extensions exists next to the given base
//! name.

use std::path::{Path, PathBuf};

/// Image extensions probed by [`find_image`], in preference order.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Kinds of platform-level artwork stored at the root of a system directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformArt {
    Poster,
    Icon,
    Fanart,
}

impl PlatformArt {
    /// Base file name (without extension) of this artwork.
    pub fn base_name(&self) -> &'static str {
        match self {
            PlatformArt::Poster => "platform_poster",
            PlatformArt::Icon => "platform_icon",
            PlatformArt::Fanart => "platform_fanart",
        }
    }
}

/// Kinds of per-ROM artwork stored under `media/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomArt {
    /// Front box art (2D)
    BoxFront,
    /// Fan-created artwork
    Fanart,
}

impl RomArt {
    /// Subdirectory of `media/` holding this artwork.
    pub fn subdir(&self) -> &'static str {
        match self {
            RomArt::BoxFront => "box2dfront",
            RomArt::Fanart => "fanart",
        }
    }
}

/// Return the first existing `<dir>/<base_name>.<ext>` for the known image
/// extensions, or `None` when no image exists.
pub fn find_image(dir: &Path, base_name: &str) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", base_name, ext)))
        .find(|candidate| candidate.exists())
}

/// Locate platform artwork inside a system directory.
pub fn find_platform_art(system_dir: &Path, art: PlatformArt) -> Option<PathBuf> {
    find_image(system_dir, art.base_name())
}

/// Locate ROM artwork for the ROM with the given base name.
pub fn find_rom_art(system_dir: &Path, rom_base_name: &str, art: RomArt) -> Option<PathBuf> {
    find_image(&system_dir.join("media").join(art.subdir()), rom_base_name)
}
