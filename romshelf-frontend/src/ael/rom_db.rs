//! `db_ROMs/<category>.json`: the per-system ROM database.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

use romshelf_core::{Rom, RomArt, path_text};

/// Directory under the output root holding the ROM databases.
pub const ROM_DB_DIR: &str = "db_ROMs";

/// One ROM entry. Field order is the key order in the written JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RomRecord {
    pub altapp: String,
    pub altarg: String,
    pub cloneof: String,
    pub disks: Vec<String>,
    pub filename: String,
    pub finished: bool,
    pub id: String,
    pub m_developer: String,
    pub m_esrb: String,
    pub m_genre: String,
    pub m_name: String,
    pub m_nplayers: String,
    pub m_plot: String,
    pub m_rating: String,
    pub m_year: String,
    pub nointro_status: String,
    pub pclone_status: String,
    pub s_banner: String,
    pub s_boxback: String,
    pub s_boxfront: String,
    pub s_cartridge: String,
    pub s_clearlogo: String,
    pub s_fanart: String,
    pub s_flyer: String,
    pub s_manual: String,
    pub s_map: String,
    pub s_snap: String,
    pub s_title: String,
    pub s_trailer: String,
}

impl Default for RomRecord {
    fn default() -> Self {
        Self {
            altapp: String::new(),
            altarg: String::new(),
            cloneof: String::new(),
            disks: Vec::new(),
            filename: String::new(),
            finished: false,
            id: String::new(),
            m_developer: String::new(),
            m_esrb: String::new(),
            m_genre: String::new(),
            m_name: String::new(),
            m_nplayers: String::new(),
            m_plot: String::new(),
            m_rating: String::new(),
            m_year: String::new(),
            nointro_status: "None".to_string(),
            pclone_status: "None".to_string(),
            s_banner: String::new(),
            s_boxback: String::new(),
            s_boxfront: String::new(),
            s_cartridge: String::new(),
            s_clearlogo: String::new(),
            s_fanart: String::new(),
            s_flyer: String::new(),
            s_manual: String::new(),
            s_map: String::new(),
            s_snap: String::new(),
            s_title: String::new(),
            s_trailer: String::new(),
        }
    }
}

impl RomRecord {
    pub fn from_rom(rom: &Rom) -> Self {
        Self {
            filename: rom.rom_path.display().to_string(),
            id: rom.id.clone(),
            m_name: rom.name.clone(),
            m_plot: rom.desc.clone(),
            s_boxfront: path_text(rom.art(RomArt::BoxFront)),
            s_fanart: path_text(rom.art(RomArt::Fanart)),
            ..Self::default()
        }
    }
}

/// ROM records keyed by ROM id, in ROM order.
///
/// A later ROM with an id already present replaces the earlier record but
/// keeps its position.
#[derive(Debug, Clone, Default)]
pub struct RomDatabase {
    entries: Vec<RomRecord>,
}

impl RomDatabase {
    pub fn from_roms(roms: &[Rom]) -> Self {
        let mut entries: Vec<RomRecord> = Vec::with_capacity(roms.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for rom in roms {
            let record = RomRecord::from_rom(rom);
            match positions.get(&record.id) {
                Some(&index) => {
                    log::debug!(
                        "Duplicate ROM id {} for {}",
                        record.id,
                        rom.rom_path.display()
                    );
                    entries[index] = record;
                }
                None => {
                    positions.insert(record.id.clone(), entries.len());
                    entries.push(record);
                }
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RomRecord> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[RomRecord] {
        &self.entries
    }

    /// Pretty-printed JSON with a one-space indent.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(out)
    }
}

impl Serialize for RomDatabase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|r| (r.id.as_str(), r)))
    }
}
