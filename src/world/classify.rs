use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::world::types::{PackageDetails, PackageKey};

/// Selection policy. `Default` keeps everything not explicitly flagged
/// automatic; the other two narrow that set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Default,
    /// Only packages explicitly marked `Auto-Installed: 0`.
    ExplicitlyManual,
    /// Default minus the base system, unless explicitly marked manual.
    FilterBase,
}

/// Why a package was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marking {
    /// Explicitly marked `Auto-Installed: 0`.
    Explicit,
    /// Never mentioned in the extended states; manual by default.
    Implicit,
}

impl Marking {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marking::Explicit => "explicit",
            Marking::Implicit => "implicit",
        }
    }
}

/// A selected package with the metadata the report renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected {
    pub marking: Marking,
    pub details: PackageDetails,
}

/// Correlate the installed set with the explicit markings under `mode`.
///
/// Total over its inputs and free of I/O. Keys absent from `installed`
/// never appear in the result, whatever the marking sets claim, and an
/// explicit manual marking always beats the base-system heuristic.
pub fn classify(
    installed: &BTreeSet<PackageKey>,
    details: &BTreeMap<PackageKey, PackageDetails>,
    automatic: &BTreeSet<PackageKey>,
    explicit_manual: &BTreeSet<PackageKey>,
    mode: Mode,
) -> BTreeMap<PackageKey, Selected> {
    let mut selection = BTreeMap::new();
    for key in installed {
        let keep = match mode {
            Mode::Default => !automatic.contains(key),
            Mode::ExplicitlyManual => explicit_manual.contains(key),
            Mode::FilterBase => {
                !automatic.contains(key)
                    && (explicit_manual.contains(key) || !is_base_package(details.get(key)))
            }
        };
        if !keep {
            continue;
        }
        let marking = if explicit_manual.contains(key) {
            Marking::Explicit
        } else {
            Marking::Implicit
        };
        selection.insert(
            key.clone(),
            Selected {
                marking,
                details: details.get(key).cloned().unwrap_or_default(),
            },
        );
    }
    selection
}

/// Base-system heuristic: essential packages and the required/important
/// priorities.
fn is_base_package(details: Option<&PackageDetails>) -> bool {
    details.is_some_and(|details| details.essential || details.priority.is_base())
}
