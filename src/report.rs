use std::collections::BTreeMap;

use comfy_table::{Table, presets};

use crate::world::{Diagnostic, PackageKey, Selected, Severity};

/// Render reader findings on stderr, keeping the listing channel clean.
/// Debug records only show up when verbose output was requested.
pub fn print_diagnostics(diagnostics: &[Diagnostic], verbose: bool) {
    for diagnostic in diagnostics {
        if diagnostic.severity == Severity::Debug && !verbose {
            continue;
        }
        eprintln!("{} {}", diagnostic.severity.color_tag(), diagnostic.message);
    }
}

/// Plain output: one sorted package identifier per line.
pub fn print_packages(selection: &BTreeMap<PackageKey, Selected>) {
    for key in selection.keys() {
        println!("{key}");
    }
}

/// Tabular output for `--report`.
pub fn print_report(selection: &BTreeMap<PackageKey, Selected>) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Package",
        "Version",
        "Priority",
        "Essential",
        "Section",
        "Marking",
    ]);
    for (key, selected) in selection {
        table.add_row(vec![
            key.as_str(),
            selected.details.version.as_deref().unwrap_or("-"),
            selected.details.priority.as_str(),
            if selected.details.essential { "yes" } else { "no" },
            selected.details.section.as_deref().unwrap_or("-"),
            selected.marking.as_str(),
        ]);
    }
    println!("{table}");
}
