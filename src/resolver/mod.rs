//! Target configuration resolution
//!
//! The resolver takes a raw declaration through a two-state lifecycle:
//! unresolved input either becomes a canonical [`TargetConfiguration`] or is
//! rejected with a [`ConfigError`]. There is no third state and no retry.

mod batch;
mod error;

pub use batch::{BatchReport, TargetOutcome};
pub use error::{ConfigError, ResolveWarning};

use once_cell::sync::Lazy;

use crate::config::RawTargetDeclaration;
use crate::domain::{is_identifier, BuildSettingsVersion, TargetConfiguration, TargetType};

/// Token authors write to track the newest version the resolver knows.
const LATEST_TOKEN: &str = "Latest";

/// Default version table: every build-settings version this build of the
/// resolver understands.
static DEFAULT_VERSIONS: Lazy<Vec<BuildSettingsVersion>> =
    Lazy::new(|| BuildSettingsVersion::ALL.to_vec());

/// Validates raw target declarations into canonical configurations.
///
/// Resolution is pure: the same declaration always yields the same
/// configuration, and no I/O happens here. The version table is fixed at
/// construction and never mutated, so one resolver can serve concurrent
/// resolutions without synchronization.
#[derive(Debug, Clone)]
pub struct TargetConfigResolver {
    known_versions: Vec<BuildSettingsVersion>,
}

impl Default for TargetConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful resolution: the canonical configuration plus any non-fatal
/// warnings collected while canonicalizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub configuration: TargetConfiguration,
    pub warnings: Vec<ResolveWarning>,
}

impl TargetConfigResolver {
    /// Resolver with the full default version table.
    pub fn new() -> Self {
        Self {
            known_versions: DEFAULT_VERSIONS.clone(),
        }
    }

    /// Resolver restricted to an explicit version table.
    ///
    /// Orchestrators pinned to an older engine drop use this to reject
    /// declarations their toolchain cannot honor.
    pub fn with_versions(versions: impl IntoIterator<Item = BuildSettingsVersion>) -> Self {
        let mut known_versions: Vec<BuildSettingsVersion> = versions.into_iter().collect();
        known_versions.sort();
        known_versions.dedup();
        Self { known_versions }
    }

    /// Supported build-settings versions, ascending. Exposed for tooling so
    /// a CLI can list upgrade targets.
    pub fn known_versions(&self) -> &[BuildSettingsVersion] {
        &self.known_versions
    }

    /// Validate and canonicalize one declaration.
    ///
    /// Module names are de-duplicated (first occurrence kept, later ones
    /// reported as warnings) with declaration order preserved. Any fatal
    /// defect aborts the whole declaration; a malformed module list means
    /// author error, not something to build around.
    pub fn resolve(&self, raw: &RawTargetDeclaration) -> Result<Resolution, ConfigError> {
        if !is_identifier(&raw.name) {
            return Err(ConfigError::InvalidTargetName {
                token: raw.name.clone(),
            });
        }

        let target_type = TargetType::from_token(&raw.target_type).ok_or_else(|| {
            ConfigError::UnknownTargetType {
                declaration: raw.name.clone(),
                token: raw.target_type.clone(),
            }
        })?;

        let build_settings = self.resolve_version(&raw.name, &raw.build_settings)?;

        let mut extra_modules: Vec<String> = Vec::with_capacity(raw.extra_modules.len());
        let mut warnings = Vec::new();
        for token in &raw.extra_modules {
            if !is_identifier(token) {
                return Err(ConfigError::InvalidModuleName {
                    declaration: raw.name.clone(),
                    token: token.clone(),
                });
            }
            if extra_modules.iter().any(|m| m == token) {
                warnings.push(ResolveWarning::DuplicateModuleName {
                    declaration: raw.name.clone(),
                    name: token.clone(),
                });
                continue;
            }
            extra_modules.push(token.clone());
        }

        tracing::debug!(
            "Resolved target '{}' ({target_type}, {build_settings}, {} modules)",
            raw.name,
            extra_modules.len()
        );

        Ok(Resolution {
            configuration: TargetConfiguration::new(
                raw.name.clone(),
                target_type,
                build_settings,
                extra_modules,
            ),
            warnings,
        })
    }

    /// Map a version token to a concrete version present in the table.
    ///
    /// `Latest` canonicalizes to the newest version this resolver knows.
    /// Everything else must parse and be present in the table; an absent
    /// version is fatal because silently defaulting would change build
    /// semantics across resolver versions.
    fn resolve_version(
        &self,
        declaration: &str,
        token: &str,
    ) -> Result<BuildSettingsVersion, ConfigError> {
        let unknown = || ConfigError::UnknownBuildSettingsVersion {
            declaration: declaration.to_string(),
            token: token.to_string(),
        };

        if token == LATEST_TOKEN {
            return self.known_versions.last().copied().ok_or_else(unknown);
        }

        let version = BuildSettingsVersion::from_token(token).ok_or_else(unknown)?;
        if !self.known_versions.contains(&version) {
            return Err(unknown());
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(modules: &[&str]) -> RawTargetDeclaration {
        RawTargetDeclaration {
            name: "Joyship2".to_string(),
            target_type: "Game".to_string(),
            build_settings: "V6".to_string(),
            extra_modules: modules.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_latest_canonicalizes_to_newest_known_version() {
        let resolver = TargetConfigResolver::new();
        let mut raw = declaration(&[]);
        raw.build_settings = "Latest".to_string();

        let resolution = resolver.resolve(&raw).unwrap();
        assert_eq!(
            resolution.configuration.build_settings(),
            BuildSettingsVersion::V6
        );
    }

    #[test]
    fn test_latest_respects_a_restricted_table() {
        let resolver = TargetConfigResolver::with_versions([
            BuildSettingsVersion::V1,
            BuildSettingsVersion::V2,
        ]);
        let mut raw = declaration(&[]);
        raw.build_settings = "Latest".to_string();

        let resolution = resolver.resolve(&raw).unwrap();
        assert_eq!(
            resolution.configuration.build_settings(),
            BuildSettingsVersion::V2
        );
    }

    #[test]
    fn test_restricted_table_rejects_newer_versions() {
        let resolver = TargetConfigResolver::with_versions([BuildSettingsVersion::V1]);
        let raw = declaration(&[]);

        let err = resolver.resolve(&raw).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownBuildSettingsVersion {
                declaration: "Joyship2".to_string(),
                token: "V6".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_target_name_is_fatal() {
        let mut raw = declaration(&[]);
        raw.name = "2Fast".to_string();

        let err = TargetConfigResolver::new().resolve(&raw).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTargetName {
                token: "2Fast".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_module_name_aborts_the_declaration() {
        let resolver = TargetConfigResolver::new();
        let raw = declaration(&["Joyship2", "bad name"]);

        let err = resolver.resolve(&raw).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidModuleName {
                declaration: "Joyship2".to_string(),
                token: "bad name".to_string(),
            }
        );
    }

    #[test]
    fn test_known_versions_are_ascending() {
        let resolver = TargetConfigResolver::with_versions([
            BuildSettingsVersion::V5,
            BuildSettingsVersion::V1,
            BuildSettingsVersion::V5,
        ]);
        assert_eq!(
            resolver.known_versions(),
            &[BuildSettingsVersion::V1, BuildSettingsVersion::V5]
        );
    }
}
