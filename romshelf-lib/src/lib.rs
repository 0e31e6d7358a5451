//! Discovery and validation for romshelf.
//!
//! [`scan_library`] walks a library root and builds the in-memory
//! [`System`](romshelf_core::System) records; [`validate_system`] checks
//! them for missing metadata.

pub mod descriptor;
pub mod options;
pub mod scanner;
pub mod validate;

pub use descriptor::{PlatformDescriptor, RomMetadata};
pub use options::{BuildOptions, CheckMode};
pub use romshelf_core::{Rom, ShelfError, System};
pub use scanner::{ScanOutcome, SkippedSystem, load_system, scan_library};
pub use validate::{Entity, Field, Finding, Reason, RomReport, SystemReport, validate_system};
