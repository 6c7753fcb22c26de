use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::world::Mode;

/// Where dpkg keeps the package status database.
pub const DEFAULT_STATUS_FILE: &str = "/var/lib/dpkg/status";
/// Where apt records explicit auto-install markings.
pub const DEFAULT_EXTENDED_STATES_FILE: &str = "/var/lib/apt/extended_states";

/// Optional settings from `~/.config/apt-world/config.toml`. Command-line
/// flags override anything set here. The file is never created or written.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub status_file: Option<PathBuf>,
    pub extended_states_file: Option<PathBuf>,
    pub verbose: Option<bool>,
    pub mode: Option<Mode>,
}

impl Config {
    /// Load the config from its default location. A missing file (or an
    /// unset HOME) just means defaults.
    pub fn load() -> Result<Config> {
        match config_file_path() {
            Some(path) => Config::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

fn config_file_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/apt-world/config.toml"))
}
