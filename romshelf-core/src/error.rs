use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading a system directory.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The system directory has no `platform.json`
    #[error("Missing platform descriptor: {}", .0.display())]
    MissingDescriptor(PathBuf),

    /// The system directory has no `roms/` folder
    #[error("Missing ROM directory: {}", .0.display())]
    MissingRomDir(PathBuf),

    /// A descriptor or ROM metadata file exists but is not valid JSON
    #[error("Malformed descriptor {}: {source}", .path.display())]
    MalformedDescriptor {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error on a path that was expected to be readable
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ShelfError {
    pub fn malformed(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::MalformedDescriptor {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether the run can continue by leaving the offending directory out.
    ///
    /// Malformed authored data and unexpected I/O failures are fatal.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::MissingDescriptor(_) | Self::MissingRomDir(_))
    }
}
