use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::world::diagnostics::Diagnostic;
use crate::world::stanza::Stanzas;
use crate::world::types::{AutoMark, PackageKey};

/// Explicit apt markings: packages flagged automatic and packages flagged
/// manual. The two sets are disjoint; for a package marked in more than one
/// stanza the last stanza wins.
#[derive(Debug, Default)]
pub struct AutoStates {
    pub automatic: BTreeSet<PackageKey>,
    pub explicit_manual: BTreeSet<PackageKey>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read apt's extended states database. Never fails: an unusable source
/// degrades to empty sets, which treats every installed package as
/// implicitly manual downstream.
pub fn read_extended_states(path: &Path) -> AutoStates {
    let mut states = AutoStates::default();
    states.diagnostics.push(Diagnostic::debug(format!(
        "reading extended states from {}",
        path.display()
    )));

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            states.diagnostics.push(Diagnostic::warning(format!(
                "could not read {}: {err}; treating all installed packages as manually installed",
                path.display()
            )));
            return states;
        }
    };

    scan_extended_states(BufReader::new(file), path, &mut states);
    states
}

fn scan_extended_states<R: BufRead>(reader: R, path: &Path, states: &mut AutoStates) {
    let mut marks = BTreeMap::new();
    for stanza in Stanzas::new(reader) {
        let stanza = match stanza {
            Ok(stanza) => stanza,
            Err(err) => {
                // Marks collected so far are discarded; the sets stay empty.
                states.diagnostics.push(Diagnostic::warning(format!(
                    "error reading {}: {err}; treating all installed packages as manually installed",
                    path.display()
                )));
                return;
            }
        };
        let Some(name) = stanza.get("Package").filter(|name| !name.is_empty()) else {
            states.diagnostics.push(Diagnostic::warning(format!(
                "stanza without 'Package' field in {}, skipping",
                path.display()
            )));
            continue;
        };
        let Some(arch) = stanza.get("Architecture").filter(|arch| !arch.is_empty()) else {
            states.diagnostics.push(Diagnostic::warning(format!(
                "package '{name}' in {} has no 'Architecture' field, skipping",
                path.display()
            )));
            continue;
        };
        let key = PackageKey::new(name, Some(arch));
        // No marking at all is fine; the package is implicitly manual.
        let Some(value) = stanza.get("Auto-Installed") else {
            continue;
        };
        match AutoMark::from_field(value) {
            Some(mark) => {
                marks.insert(key, mark);
            }
            None => states.diagnostics.push(Diagnostic::warning(format!(
                "package '{key}' in {} has invalid Auto-Installed value '{value}', skipping",
                path.display()
            ))),
        }
    }

    states.diagnostics.push(Diagnostic::debug(format!(
        "found {} packages with explicit auto-install markings in {}",
        marks.len(),
        path.display()
    )));
    for (key, mark) in marks {
        match mark {
            AutoMark::Automatic => states.automatic.insert(key),
            AutoMark::Manual => states.explicit_manual.insert(key),
        };
    }
}
