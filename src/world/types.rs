use std::fmt;

/// Canonical package identity: `name:architecture` when the architecture is
/// known (including `all`), bare `name` otherwise.
///
/// Ordering and equality operate on the rendered form, so a sorted
/// collection of keys is already in output order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageKey(String);

impl PackageKey {
    pub fn new(name: &str, architecture: Option<&str>) -> Self {
        match architecture {
            Some(arch) => PackageKey(format!("{name}:{arch}")),
            None => PackageKey(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PackageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Installation state derived from the dpkg `Status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    Installed,
    NotInstalled,
    Unknown,
}

impl InstallState {
    /// Reads the three-token `Status` field (`want error-flag state`).
    ///
    /// A package counts as installed only for the exact tokens
    /// `install ok installed`. The historical substring check also matched
    /// stray text in corrupted stanzas, so it is deliberately not used.
    pub fn from_field(value: &str) -> Self {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        match tokens.as_slice() {
            ["install", "ok", "installed"] => InstallState::Installed,
            [_, _, _] => InstallState::NotInstalled,
            _ => InstallState::Unknown,
        }
    }

    pub fn is_installed(self) -> bool {
        matches!(self, InstallState::Installed)
    }
}

/// Debian package priority. Unrecognized values and absent `Priority`
/// fields both map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Required,
    Important,
    Standard,
    Optional,
    Extra,
    #[default]
    Unknown,
}

impl Priority {
    pub fn from_field(value: &str) -> Self {
        match value {
            "required" => Priority::Required,
            "important" => Priority::Important,
            "standard" => Priority::Standard,
            "optional" => Priority::Optional,
            "extra" => Priority::Extra,
            _ => Priority::Unknown,
        }
    }

    /// Required and important packages make up the Debian base system.
    pub fn is_base(self) -> bool {
        matches!(self, Priority::Required | Priority::Important)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Required => "required",
            Priority::Important => "important",
            Priority::Standard => "standard",
            Priority::Optional => "optional",
            Priority::Extra => "extra",
            Priority::Unknown => "unknown",
        }
    }
}

/// Explicit `Auto-Installed` marking from the extended states database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoMark {
    Manual,
    Automatic,
}

impl AutoMark {
    /// `"0"` and `"1"` are the only valid field values.
    pub fn from_field(value: &str) -> Option<Self> {
        match value {
            "0" => Some(AutoMark::Manual),
            "1" => Some(AutoMark::Automatic),
            _ => None,
        }
    }
}

/// Per-package metadata captured from the status database for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDetails {
    pub priority: Priority,
    pub essential: bool,
    pub version: Option<String>,
    pub section: Option<String>,
}
