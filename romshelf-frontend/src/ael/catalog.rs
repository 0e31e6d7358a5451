//! `categories.xml`: the launcher catalog.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use romshelf_core::{System, path_text};

use crate::{FrontendError, dir_text};

/// File name of the catalog inside the output directory.
pub const CATALOG_FILE: &str = "categories.xml";

const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

/// Root element of the catalog.
#[derive(Serialize)]
#[serde(rename = "advanced_emulator_launcher")]
struct CatalogDocument<'a> {
    #[serde(rename = "@version")]
    version: &'static str,
    launcher: &'a [LauncherRecord],
}

/// One `<launcher>` element. Field order is the element order.
///
/// Only the identity, metadata, launch and asset fields come from the
/// [`System`]; everything else carries the value the launcher expects for
/// a freshly created flat-mode launcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LauncherRecord {
    pub id: String,
    pub m_name: String,
    pub m_year: String,
    pub m_genre: String,
    pub m_developer: String,
    pub m_rating: String,
    pub m_plot: String,
    pub platform: String,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    pub application: String,
    pub args: String,
    pub rompath: String,
    pub romext: String,
    #[serde(serialize_with = "bool_text")]
    pub finished: bool,
    #[serde(serialize_with = "bool_text")]
    pub minimize: bool,
    #[serde(serialize_with = "bool_text")]
    pub non_blocking: bool,
    pub roms_base_noext: String,
    pub nointro_xml_file: String,
    pub nointro_display_mode: String,
    pub launcher_display_mode: String,
    pub num_roms: usize,
    pub num_parents: usize,
    pub num_clones: usize,
    pub num_have: usize,
    pub num_miss: usize,
    pub num_unknown: usize,
    pub timestamp_lancher: String,
    pub timestamp_report: String,
    pub default_icon: String,
    pub default_fanart: String,
    pub default_banner: String,
    pub default_poster: String,
    pub default_clearlogo: String,
    pub default_controller: String,
    #[serde(rename = "Asset_Prefix")]
    pub asset_prefix: String,
    pub s_icon: String,
    pub s_fanart: String,
    pub s_banner: String,
    pub s_poster: String,
    pub s_clearlogo: String,
    pub s_controller: String,
    pub s_trailer: String,
    pub roms_default_icon: String,
    pub roms_default_fanart: String,
    pub roms_default_banner: String,
    pub roms_default_poster: String,
    pub roms_default_clearlogo: String,
    #[serde(rename = "ROM_asset_path")]
    pub rom_asset_path: String,
    pub path_title: String,
    pub path_snap: String,
    pub path_boxfront: String,
    pub path_boxback: String,
    pub path_cartridge: String,
    pub path_fanart: String,
    pub path_banner: String,
    pub path_clearlogo: String,
    pub path_flyer: String,
    pub path_map: String,
    pub path_manual: String,
    pub path_trailer: String,
}

impl Default for LauncherRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            m_name: String::new(),
            m_year: String::new(),
            m_genre: String::new(),
            m_developer: String::new(),
            m_rating: String::new(),
            m_plot: String::new(),
            platform: String::new(),
            category_id: "root_category".to_string(),
            application: String::new(),
            args: String::new(),
            rompath: String::new(),
            romext: String::new(),
            finished: false,
            minimize: false,
            non_blocking: false,
            roms_base_noext: String::new(),
            nointro_xml_file: String::new(),
            nointro_display_mode: "All ROMs".to_string(),
            launcher_display_mode: "Flat mode".to_string(),
            num_roms: 0,
            num_parents: 0,
            num_clones: 0,
            num_have: 0,
            num_miss: 0,
            num_unknown: 0,
            timestamp_lancher: String::new(),
            timestamp_report: "0.0".to_string(),
            default_icon: "s_icon".to_string(),
            default_fanart: "s_fanart".to_string(),
            default_banner: "s_banner".to_string(),
            default_poster: "s_poster".to_string(),
            default_clearlogo: "s_clearlogo".to_string(),
            default_controller: "s_controller".to_string(),
            asset_prefix: String::new(),
            s_icon: String::new(),
            s_fanart: String::new(),
            s_banner: String::new(),
            s_poster: String::new(),
            s_clearlogo: String::new(),
            s_controller: String::new(),
            s_trailer: String::new(),
            roms_default_icon: "s_boxfront".to_string(),
            roms_default_fanart: "s_fanart".to_string(),
            roms_default_banner: "s_banner".to_string(),
            roms_default_poster: "s_flyer".to_string(),
            roms_default_clearlogo: "s_clearlogo".to_string(),
            rom_asset_path: String::new(),
            path_title: String::new(),
            path_snap: String::new(),
            path_boxfront: String::new(),
            path_boxback: String::new(),
            path_cartridge: String::new(),
            path_fanart: String::new(),
            path_banner: String::new(),
            path_clearlogo: String::new(),
            path_flyer: String::new(),
            path_map: String::new(),
            path_manual: String::new(),
            path_trailer: String::new(),
        }
    }
}

impl LauncherRecord {
    /// Build the launcher entry for a system, created at `timestamp`.
    pub fn from_system(system: &System, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: system.id.clone(),
            m_name: system.name.clone(),
            m_plot: system.plot.clone(),
            platform: system.name.clone(),
            application: system.application.clone(),
            args: system.args.clone(),
            rompath: dir_text(&system.rompath),
            romext: system.romext.join("|"),
            roms_base_noext: system.category_name(),
            num_roms: system.roms.len(),
            timestamp_lancher: format_timestamp(timestamp),
            s_icon: path_text(system.icon.as_deref()),
            s_fanart: path_text(system.fanart.as_deref()),
            s_poster: path_text(system.poster.as_deref()),
            ..Self::default()
        }
    }
}

/// Serialize launcher records into the full catalog document.
pub fn render_catalog(records: &[LauncherRecord]) -> Result<String, FrontendError> {
    let document = CatalogDocument {
        version: "1",
        launcher: records,
    };

    let mut xml = String::from(XML_DECLARATION);
    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    document
        .serialize(serializer)
        .map_err(|e| FrontendError::xml(e.to_string()))?;
    xml.push('\n');

    Ok(xml)
}

/// Seconds since the epoch with a fractional part, e.g. `1700000000.250000`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    format!(
        "{}.{:06}",
        timestamp.timestamp(),
        timestamp.timestamp_subsec_micros()
    )
}

fn bool_text<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}
