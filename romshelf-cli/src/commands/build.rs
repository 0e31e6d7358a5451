use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romshelf_frontend::{AelFrontend, ExportOptions, Frontend};
use romshelf_lib::{BuildOptions, System, scan_library, validate_system};

use crate::CliError;
use crate::report::render_report;

/// Scan `input`, optionally validate, and write the launcher files to `output`.
pub(crate) fn run_build(
    input: &Path,
    output: &Path,
    options: &BuildOptions,
) -> Result<(), CliError> {
    let input = std::path::absolute(input)?;

    log::info!("Scanning systems in: {}", input.display());
    let outcome = scan_library(&input)?;

    for skipped in &outcome.skipped {
        log::warn!("System {} skipped ({})", skipped.dir_name, skipped.reason);
    }

    if options.check.is_enabled() {
        check_systems(&outcome.systems, options);
    }

    let frontend = AelFrontend::new();
    let mut export = ExportOptions::new(output);
    if let Some(timestamp) = options.timestamp {
        export = export.timestamp(timestamp);
    }
    let summary = frontend.write_all(&outcome.systems, &export)?;

    log::info!(
        "{} {} systems, {} ROMs for {} ({} skipped)",
        "Wrote".if_supports_color(Stdout, |t| t.bold()),
        outcome.systems.len(),
        summary.rom_count,
        frontend.name(),
        outcome.skipped.len(),
    );
    log::info!("  Catalog: {}", summary.catalog_path.display());

    Ok(())
}

fn check_systems(systems: &[System], options: &BuildOptions) {
    let mut findings = 0;

    for system in systems {
        let report = validate_system(system);
        findings += report.finding_count();
        if !report.should_print(options.check) {
            continue;
        }

        let mut lines = render_report(&report, options.check).into_iter();
        if let Some(label) = lines.next() {
            log::info!("{}", label.if_supports_color(Stdout, |t| t.bold()));
        }
        for line in lines {
            log::info!("{}", line);
        }
        crate::log_blank();
    }

    log::debug!("Validation found {} missing fields", findings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use romshelf_lib::CheckMode;
    use std::fs;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_run_build_stamps_configured_timestamp() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let system = input.path().join("atari2600");
        write(
            &system.join("platform.json"),
            r#"{"name": "Atari 2600", "romext": ["bin"]}"#,
        );
        write(&system.join("roms/pitfall.bin"), "ROM");
        write(
            &system.join("media/json/pitfall.json"),
            r#"{"name": "Pitfall!", "desc": "Classic platformer"}"#,
        );

        let ts = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        let options = BuildOptions::new()
            .check(CheckMode::ErrorsOnly)
            .timestamp(ts);
        run_build(input.path(), output.path(), &options).unwrap();
        let first = fs::read_to_string(output.path().join("categories.xml")).unwrap();
        assert!(first.contains("<timestamp_lancher>1700000000.250000</timestamp_lancher>"));

        run_build(input.path(), output.path(), &options).unwrap();
        let second = fs::read_to_string(output.path().join("categories.xml")).unwrap();
        assert_eq!(first, second);
    }
}
