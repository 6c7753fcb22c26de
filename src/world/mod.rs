//! Core pipeline for listing manually installed packages.
//!
//! [`evaluate`] wires the stages together: the status reader produces the
//! installed set, the extended-states reader the explicit markings, and the
//! classifier folds both into the final selection. Reader findings come
//! back as diagnostics for the caller to render.

pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod extended_states;
pub mod stanza;
pub mod status;
pub mod types;

use std::collections::BTreeMap;
use std::path::Path;

pub use classify::{Marking, Mode, Selected, classify};
pub use diagnostics::{Diagnostic, Severity};
pub use error::WorldError;
pub use types::{PackageDetails, PackageKey, Priority};

use extended_states::read_extended_states;
use status::read_status;

/// Outcome of a full evaluation: the selected packages plus everything the
/// readers reported along the way.
#[derive(Debug)]
pub struct WorldReport {
    pub selection: BTreeMap<PackageKey, Selected>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the whole pipeline over the two source files.
///
/// Only an unreadable status database is fatal; extended-states trouble
/// degrades to "no explicit markings" with a warning.
pub fn evaluate(
    status_file: &Path,
    extended_states_file: &Path,
    mode: Mode,
) -> Result<WorldReport, WorldError> {
    let scan = read_status(status_file)?;
    let states = read_extended_states(extended_states_file);

    let selection = classify(
        &scan.installed,
        &scan.details,
        &states.automatic,
        &states.explicit_manual,
        mode,
    );

    let mut diagnostics = scan.diagnostics;
    diagnostics.extend(states.diagnostics);
    diagnostics.push(Diagnostic::debug(format!(
        "identified {} manually installed packages",
        selection.len()
    )));

    Ok(WorldReport {
        selection,
        diagnostics,
    })
}
