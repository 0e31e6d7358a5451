//! Metadata completeness checks.
//!
//! Validation produces structured [`Finding`]s and never influences what
//! gets written; rendering the findings is left to the caller.

use std::fmt;

use romshelf_core::{PlatformArt, Rom, RomArt, System};

use crate::options::CheckMode;

/// The kind of record a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Platform,
    Rom,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Platform => f.write_str("Platform"),
            Entity::Rom => f.write_str("Rom"),
        }
    }
}

/// A checked attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Plot,
    Application,
    Args,
    Poster,
    Icon,
    Fanart,
    Desc,
    BoxartPath,
    FanartPath,
}

impl Field {
    /// Fields checked on every platform, in report order.
    pub const PLATFORM: &'static [Field] = &[
        Field::Name,
        Field::Plot,
        Field::Application,
        Field::Args,
        Field::Poster,
        Field::Icon,
        Field::Fanart,
    ];

    /// Fields checked on every ROM, in report order.
    pub const ROM: &'static [Field] = &[
        Field::Name,
        Field::Desc,
        Field::BoxartPath,
        Field::FanartPath,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Plot => "plot",
            Field::Application => "application",
            Field::Args => "args",
            Field::Poster => "poster",
            Field::Icon => "icon",
            Field::Fanart => "fanart",
            Field::Desc => "desc",
            Field::BoxartPath => "boxart_path",
            Field::FanartPath => "fanart_path",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    Missing,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Missing => f.write_str("missing"),
        }
    }
}

/// One problem found on a platform or ROM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub entity: Entity,
    pub field: Field,
    pub reason: Reason,
}

impl Finding {
    pub fn missing(entity: Entity, field: Field) -> Self {
        Self {
            entity,
            field,
            reason: Reason::Missing,
        }
    }
}

/// Renders as e.g. `Platform plot missing`.
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.entity, self.field, self.reason)
    }
}

/// Findings for one ROM.
#[derive(Debug, Clone, PartialEq)]
pub struct RomReport {
    /// Display label of the ROM
    pub label: String,
    pub findings: Vec<Finding>,
}

impl RomReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn should_print(&self, mode: CheckMode) -> bool {
        mode.is_verbose() || !self.is_clean()
    }
}

/// Findings for one system and all of its ROMs.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemReport {
    /// Display label of the system, `<name> (<n> Roms)`
    pub label: String,
    pub findings: Vec<Finding>,
    pub roms: Vec<RomReport>,
}

impl SystemReport {
    /// Whether neither the system nor any of its ROMs has findings.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.roms.iter().all(RomReport::is_clean)
    }

    /// Whether this report should be shown under the given mode.
    pub fn should_print(&self, mode: CheckMode) -> bool {
        match mode {
            CheckMode::Off => false,
            CheckMode::ErrorsOnly => !self.is_clean(),
            CheckMode::Verbose => true,
        }
    }

    /// ROM reports to show under the given mode.
    pub fn printable_roms(&self, mode: CheckMode) -> impl Iterator<Item = &RomReport> {
        self.roms.iter().filter(move |r| r.should_print(mode))
    }

    pub fn finding_count(&self) -> usize {
        self.findings.len() + self.roms.iter().map(|r| r.findings.len()).sum::<usize>()
    }
}

/// Check a system and its ROMs for missing fields.
pub fn validate_system(system: &System) -> SystemReport {
    let findings = Field::PLATFORM
        .iter()
        .filter(|field| !platform_has(system, **field))
        .map(|field| Finding::missing(Entity::Platform, *field))
        .collect();

    SystemReport {
        label: system.to_string(),
        findings,
        roms: system.roms.iter().map(validate_rom).collect(),
    }
}

/// Check one ROM for missing fields.
pub fn validate_rom(rom: &Rom) -> RomReport {
    let findings = Field::ROM
        .iter()
        .filter(|field| !rom_has(rom, **field))
        .map(|field| Finding::missing(Entity::Rom, *field))
        .collect();

    RomReport {
        label: rom.to_string(),
        findings,
    }
}

fn platform_has(system: &System, field: Field) -> bool {
    match field {
        Field::Name => !system.name.is_empty(),
        Field::Plot => !system.plot.is_empty(),
        Field::Application => !system.application.is_empty(),
        Field::Args => !system.args.is_empty(),
        Field::Poster => system.art(PlatformArt::Poster).is_some(),
        Field::Icon => system.art(PlatformArt::Icon).is_some(),
        Field::Fanart => system.art(PlatformArt::Fanart).is_some(),
        Field::Desc | Field::BoxartPath | Field::FanartPath => true,
    }
}

fn rom_has(rom: &Rom, field: Field) -> bool {
    match field {
        Field::Name => !rom.name.is_empty(),
        Field::Desc => !rom.desc.is_empty(),
        Field::BoxartPath => rom.art(RomArt::BoxFront).is_some(),
        Field::FanartPath => rom.art(RomArt::Fanart).is_some(),
        _ => true,
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
