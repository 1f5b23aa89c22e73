//! Target declaration loading and discovery

mod io;

pub use io::discover_declarations;

use serde::{Deserialize, Serialize};

/// On-disk shape of a `*.target.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDeclarationFile {
    pub target: RawTargetDeclaration,
}

/// A target declaration as authored, before validation.
///
/// Tokens stay raw strings here on purpose: the resolver owns validation, so
/// a bad token surfaces as a structured `ConfigError` naming the declaration
/// and the token, not as a serde failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTargetDeclaration {
    /// Target name, e.g. "Joyship2"
    pub name: String,

    /// Target type token, e.g. "Game"
    #[serde(rename = "type")]
    pub target_type: String,

    /// Build-settings version token, e.g. "V6" or "Latest"
    pub build_settings: String,

    /// Module name tokens, in declaration order
    #[serde(default)]
    pub extra_modules: Vec<String>,
}
