use super::*;
use std::fs;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_load_platform() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("platform.json"),
        r#"{
            "name": "Atari 2600",
            "desc": "Home console",
            "application": "/usr/bin/stella",
            "args": "\"$rom$\"",
            "romext": ["bin", "a26"]
        }"#,
    );

    let platform = load_platform(dir.path()).unwrap();
    assert_eq!(platform.name, "Atari 2600");
    assert_eq!(platform.desc, "Home console");
    assert_eq!(platform.application, "/usr/bin/stella");
    assert_eq!(platform.args, "\"$rom$\"");
    assert_eq!(platform.romext, vec!["bin", "a26"]);
}

#[test]
fn test_load_platform_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("platform.json"),
        r#"{"name": "NES", "desc": null, "romext": null, "extra": 1}"#,
    );

    let platform = load_platform(dir.path()).unwrap();
    assert_eq!(platform.name, "NES");
    assert_eq!(platform.desc, "");
    assert_eq!(platform.application, "");
    assert!(platform.romext.is_empty());
}

#[test]
fn test_load_platform_missing_is_skippable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_platform(dir.path()).unwrap_err();
    assert!(matches!(err, ShelfError::MissingDescriptor(_)));
    assert!(err.is_skippable());
}

#[test]
fn test_load_platform_malformed_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("platform.json"), "{ \"name\": ");
    let err = load_platform(dir.path()).unwrap_err();
    assert!(matches!(err, ShelfError::MalformedDescriptor { .. }));
    assert!(!err.is_skippable());
}

#[test]
fn test_load_platform_without_name_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("platform.json"), r#"{"desc": "nameless"}"#);
    let err = load_platform(dir.path()).unwrap_err();
    assert!(!err.is_skippable());
}

#[test]
fn test_load_rom_metadata_missing_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load_rom_metadata(dir.path(), "unknown").unwrap(), None);
}

#[test]
fn test_load_rom_metadata_included_default() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &rom_metadata_path(dir.path(), "pitfall"),
        r#"{"name": "Pitfall!", "desc": "Classic platformer"}"#,
    );

    let meta = load_rom_metadata(dir.path(), "pitfall").unwrap().unwrap();
    assert_eq!(meta.name, "Pitfall!");
    assert_eq!(meta.desc, "Classic platformer");
    assert!(meta.add_to_lib);
    assert!(meta.included());
}

#[test]
fn test_load_rom_metadata_null_add_to_lib_excludes() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &rom_metadata_path(dir.path(), "x"),
        r#"{"name": "X", "desc": "d", "add_to_lib": null}"#,
    );
    let meta = load_rom_metadata(dir.path(), "x").unwrap().unwrap();
    assert!(!meta.add_to_lib);
    assert!(!meta.included());
}

#[test]
fn test_load_rom_metadata_excluded() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &rom_metadata_path(dir.path(), "bad"),
        r#"{"name": "", "desc": "", "add_to_lib": false}"#,
    );
    let meta = load_rom_metadata(dir.path(), "bad").unwrap().unwrap();
    assert!(!meta.included());
}

#[test]
fn test_load_rom_metadata_malformed_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(&rom_metadata_path(dir.path(), "broken"), "not json");
    let err = load_rom_metadata(dir.path(), "broken").unwrap_err();
    assert!(matches!(err, ShelfError::MalformedDescriptor { .. }));
}

#[test]
fn test_rom_metadata_path() {
    let path = rom_metadata_path(Path::new("/shelf/atari"), "pitfall");
    assert_eq!(path, Path::new("/shelf/atari/media/json/pitfall.json"));
}
