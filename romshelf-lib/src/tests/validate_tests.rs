use super::*;
use std::path::PathBuf;

use romshelf_core::ids::hash_id;

fn complete_system() -> System {
    System {
        id: hash_id("Atari 2600"),
        name: "Atari 2600".to_string(),
        plot: "Home console".to_string(),
        application: "stella".to_string(),
        args: "$rom$".to_string(),
        romext: vec!["bin".to_string()],
        poster: Some(PathBuf::from("/a/platform_poster.png")),
        icon: Some(PathBuf::from("/a/platform_icon.png")),
        fanart: Some(PathBuf::from("/a/platform_fanart.png")),
        path: PathBuf::from("/a"),
        rompath: PathBuf::from("/a/roms"),
        roms: Vec::new(),
    }
}

fn complete_rom(name: &str) -> Rom {
    Rom {
        id: hash_id(name),
        name: name.to_string(),
        desc: "A game".to_string(),
        rom_path: PathBuf::from(format!("/a/roms/{}.bin", name)),
        boxart_path: Some(PathBuf::from(format!("/a/media/box2dfront/{}.png", name))),
        fanart_path: Some(PathBuf::from(format!("/a/media/fanart/{}.png", name))),
        included: true,
    }
}

#[test]
fn test_complete_system_is_clean() {
    let mut system = complete_system();
    system.roms.push(complete_rom("pitfall"));

    let report = validate_system(&system);
    assert!(report.is_clean());
    assert_eq!(report.finding_count(), 0);
    assert!(!report.should_print(CheckMode::ErrorsOnly));
    assert!(report.should_print(CheckMode::Verbose));
    assert!(!report.should_print(CheckMode::Off));
}

#[test]
fn test_missing_plot_is_reported() {
    let mut system = complete_system();
    system.plot.clear();

    let report = validate_system(&system);
    assert_eq!(
        report.findings,
        vec![Finding::missing(Entity::Platform, Field::Plot)]
    );
    assert_eq!(report.findings[0].to_string(), "Platform plot missing");
    assert!(report.should_print(CheckMode::ErrorsOnly));
}

#[test]
fn test_platform_findings_follow_field_order() {
    let mut system = complete_system();
    system.application.clear();
    system.args.clear();
    system.poster = None;
    system.fanart = None;

    let report = validate_system(&system);
    let fields: Vec<Field> = report.findings.iter().map(|f| f.field).collect();
    assert_eq!(
        fields,
        vec![Field::Application, Field::Args, Field::Poster, Field::Fanart]
    );
}

#[test]
fn test_rom_findings() {
    let mut rom = complete_rom("pitfall");
    rom.desc.clear();
    rom.boxart_path = None;

    let report = validate_rom(&rom);
    let messages: Vec<String> = report.findings.iter().map(|f| f.to_string()).collect();
    assert_eq!(
        messages,
        vec!["Rom desc missing", "Rom boxart_path missing"]
    );
    assert_eq!(report.label, "pitfall");
}

#[test]
fn test_rom_problem_makes_system_printable() {
    let mut system = complete_system();
    let mut bad = complete_rom("adventure");
    bad.fanart_path = None;
    system.roms.push(complete_rom("pitfall"));
    system.roms.push(bad);

    let report = validate_system(&system);
    assert!(report.findings.is_empty());
    assert!(!report.is_clean());
    assert!(report.should_print(CheckMode::ErrorsOnly));
    assert_eq!(report.label, "Atari 2600 (2 Roms)");

    let shown: Vec<&str> = report
        .printable_roms(CheckMode::ErrorsOnly)
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(shown, vec!["adventure"]);

    let shown_verbose = report.printable_roms(CheckMode::Verbose).count();
    assert_eq!(shown_verbose, 2);
}
