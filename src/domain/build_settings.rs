//! Build-settings version tags

use std::fmt;

use serde::{Deserialize, Serialize};

/// A versioned bundle of default compiler/linker behaviors.
///
/// Versions are ordered so tooling can tell upgrades from downgrades. The
/// declaration token `Latest` is an alias only; canonical configurations
/// always carry a concrete version, so two builds of the same declaration
/// never drift apart when a new version ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildSettingsVersion {
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
}

impl BuildSettingsVersion {
    /// Every concrete version, ascending.
    pub const ALL: [BuildSettingsVersion; 6] = [
        BuildSettingsVersion::V1,
        BuildSettingsVersion::V2,
        BuildSettingsVersion::V3,
        BuildSettingsVersion::V4,
        BuildSettingsVersion::V5,
        BuildSettingsVersion::V6,
    ];

    /// Parse a concrete version token. Case-sensitive; the `Latest` alias is
    /// handled by the resolver, which knows its own version table.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "V1" => Some(BuildSettingsVersion::V1),
            "V2" => Some(BuildSettingsVersion::V2),
            "V3" => Some(BuildSettingsVersion::V3),
            "V4" => Some(BuildSettingsVersion::V4),
            "V5" => Some(BuildSettingsVersion::V5),
            "V6" => Some(BuildSettingsVersion::V6),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildSettingsVersion::V1 => "V1",
            BuildSettingsVersion::V2 => "V2",
            BuildSettingsVersion::V3 => "V3",
            BuildSettingsVersion::V4 => "V4",
            BuildSettingsVersion::V5 => "V5",
            BuildSettingsVersion::V6 => "V6",
        }
    }
}

impl fmt::Display for BuildSettingsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
