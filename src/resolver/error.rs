//! Resolution error taxonomy

/// Fatal resolution defects.
///
/// All of these are author-facing configuration mistakes caught before any
/// compilation work starts. None are retried and none fall back to a default:
/// guessing would silently change what gets built. Every variant names the
/// offending token and the declaration it came from so batch reports stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "target '{declaration}': unknown target type '{token}' \
         (expected one of: Game, Editor, Client, Server, Program)"
    )]
    UnknownTargetType { declaration: String, token: String },

    #[error("target '{declaration}': unknown build settings version '{token}'")]
    UnknownBuildSettingsVersion { declaration: String, token: String },

    #[error("target '{declaration}': invalid module name '{token}'")]
    InvalidModuleName { declaration: String, token: String },

    #[error("invalid target name '{token}'")]
    InvalidTargetName { token: String },
}

/// Non-fatal defects reported alongside a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveWarning {
    #[error("target '{declaration}': duplicate module name '{name}' ignored")]
    DuplicateModuleName { declaration: String, name: String },
}
