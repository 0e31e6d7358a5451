use std::fs;
use std::path::Path;

use romshelf_core::ids::hash_id;
use romshelf_lib::{CheckMode, Entity, Field, Finding, scan_library, validate_system};
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn make_library() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let atari = tmp.path().join("atari2600");
    write(
        &atari.join("platform.json"),
        r#"{"name": "Atari 2600", "application": "stella", "args": "$rom$", "romext": ["bin"]}"#,
    );
    for art in ["platform_poster.png", "platform_icon.png", "platform_fanart.jpeg"] {
        write(&atari.join(art), "");
    }
    write(&atari.join("roms/pitfall.bin"), "ROM");
    write(&atari.join("roms/unknown.bin"), "ROM");
    write(&atari.join("roms/demo.bin"), "ROM");
    write(
        &atari.join("media/json/pitfall.json"),
        r#"{"name": "Pitfall!", "desc": "Classic platformer", "add_to_lib": true}"#,
    );
    write(
        &atari.join("media/json/demo.json"),
        r#"{"name": "Demo", "desc": "", "add_to_lib": false}"#,
    );
    write(&atari.join("media/box2dfront/pitfall.png"), "");
    write(&atari.join("media/fanart/pitfall.jpg"), "");

    let nes = tmp.path().join("nes");
    fs::create_dir_all(nes.join("roms")).unwrap();
    write(&nes.join("roms/smb.nes"), "ROM");
    tmp
}

#[test]
fn scan_keeps_only_described_included_roms() {
    let library = make_library();
    let outcome = scan_library(library.path()).unwrap();

    assert_eq!(outcome.systems.len(), 1);
    let atari = &outcome.systems[0];
    assert_eq!(atari.to_string(), "Atari 2600 (1 Roms)");
    assert_eq!(atari.roms[0].id, hash_id("pitfall"));
    assert_eq!(atari.roms[0].name, "Pitfall!");
    assert!(atari.fanart.as_ref().unwrap().ends_with("platform_fanart.jpeg"));

    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].dir_name, "nes");
}

#[test]
fn validation_flags_missing_plot_only() {
    let library = make_library();
    let outcome = scan_library(library.path()).unwrap();
    let report = validate_system(&outcome.systems[0]);

    assert_eq!(
        report.findings,
        vec![Finding::missing(Entity::Platform, Field::Plot)]
    );
    assert!(report.roms.iter().all(|r| r.is_clean()));
    assert!(report.should_print(CheckMode::ErrorsOnly));
    assert_eq!(report.printable_roms(CheckMode::ErrorsOnly).count(), 0);
}
