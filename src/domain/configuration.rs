//! Canonical target configuration

use serde::Serialize;

use super::{BuildSettingsVersion, TargetType};

/// A validated, canonical build-target declaration.
///
/// Constructed only by the resolver; the orchestrator reads it once per build
/// and discards it. Fields are exposed through read-only accessors so target
/// type and version cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetConfiguration {
    name: String,
    target_type: TargetType,
    build_settings: BuildSettingsVersion,
    extra_modules: Vec<String>,
}

impl TargetConfiguration {
    pub(crate) fn new(
        name: String,
        target_type: TargetType,
        build_settings: BuildSettingsVersion,
        extra_modules: Vec<String>,
    ) -> Self {
        Self {
            name,
            target_type,
            build_settings,
            extra_modules,
        }
    }

    /// Target name, also the artifact's base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn build_settings(&self) -> BuildSettingsVersion {
        self.build_settings
    }

    /// Module names to link beyond engine defaults, in declaration order with
    /// duplicates removed.
    pub fn extra_modules(&self) -> &[String] {
        &self.extra_modules
    }
}
