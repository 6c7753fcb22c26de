use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::world::diagnostics::Diagnostic;
use crate::world::error::WorldError;
use crate::world::stanza::Stanzas;
use crate::world::types::{InstallState, PackageDetails, PackageKey, Priority};

/// Everything the status database contributes: the installed set, the
/// per-package details behind it, and the findings collected on the way.
#[derive(Debug, Default)]
pub struct StatusScan {
    pub installed: BTreeSet<PackageKey>,
    pub details: BTreeMap<PackageKey, PackageDetails>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read the dpkg status database. An unreadable source is fatal; broken
/// individual stanzas are skipped with a warning and never abort the scan.
pub fn read_status(path: &Path) -> Result<StatusScan, WorldError> {
    let unreadable = |source| WorldError::StatusUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    scan_status(BufReader::new(file), path).map_err(unreadable)
}

fn scan_status<R: BufRead>(reader: R, path: &Path) -> io::Result<StatusScan> {
    let mut scan = StatusScan::default();
    scan.diagnostics.push(Diagnostic::debug(format!(
        "reading status database from {}",
        path.display()
    )));

    for stanza in Stanzas::new(reader) {
        let stanza = stanza?;
        // An empty name is as unusable as a missing one.
        let Some(name) = stanza.get("Package").filter(|name| !name.is_empty()) else {
            scan.diagnostics.push(Diagnostic::warning(format!(
                "stanza without 'Package' field in {}, skipping",
                path.display()
            )));
            continue;
        };
        let Some(status) = stanza.get("Status") else {
            scan.diagnostics.push(Diagnostic::warning(format!(
                "package '{name}' in {} has no 'Status' field, skipping",
                path.display()
            )));
            continue;
        };
        if !InstallState::from_field(status).is_installed() {
            continue;
        }

        let key = match stanza.get("Architecture").filter(|arch| !arch.is_empty()) {
            Some(arch) => PackageKey::new(name, Some(arch)),
            None => {
                scan.diagnostics.push(Diagnostic::debug(format!(
                    "package '{name}' has no 'Architecture' field, using the unqualified name"
                )));
                PackageKey::new(name, None)
            }
        };
        let details = PackageDetails {
            priority: stanza
                .get("Priority")
                .map(Priority::from_field)
                .unwrap_or_default(),
            essential: stanza.get("Essential") == Some("yes"),
            version: stanza.get("Version").map(str::to_string),
            section: stanza.get("Section").map(str::to_string),
        };
        scan.details.insert(key.clone(), details);
        scan.installed.insert(key);
    }

    scan.diagnostics.push(Diagnostic::debug(format!(
        "found {} installed packages in {}",
        scan.installed.len(),
        path.display()
    )));
    Ok(scan)
}
