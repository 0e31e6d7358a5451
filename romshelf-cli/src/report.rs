//! Console rendering of validation reports.

use romshelf_lib::{CheckMode, SystemReport};

/// Render a system report as console lines.
///
/// ```text
/// Atari 2600 (2 Roms)
///   Platform plot missing
///   - Pitfall!
///       Rom fanart_path missing
/// ```
pub(crate) fn render_report(report: &SystemReport, mode: CheckMode) -> Vec<String> {
    let mut lines = vec![report.label.clone()];
    lines.extend(report.findings.iter().map(|f| format!("  {}", f)));

    for rom in report.printable_roms(mode) {
        lines.push(format!("  - {}", rom.label));
        lines.extend(rom.findings.iter().map(|f| format!("      {}", f)));
    }

    lines
}
