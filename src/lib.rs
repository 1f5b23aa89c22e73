//! targetrules - build-target declaration resolution
//!
//! A build orchestrator decides three things per target: what category of
//! artifact to produce, which versioned bundle of default build behaviors to
//! apply, and which modules to link. This crate owns the declaration side of
//! that contract: it loads `*.target.toml` files, validates their tokens, and
//! hands the orchestrator a canonical [`TargetConfiguration`].
//!
//! Resolution is pure and synchronous. A rejected declaration is an authoring
//! defect, never a transient condition, so errors are structured values the
//! caller can aggregate across many targets instead of aborting at the first
//! bad file.

pub mod config;
pub mod domain;
pub mod resolver;

pub use domain::{BuildSettingsVersion, TargetConfiguration, TargetType};
pub use resolver::{ConfigError, Resolution, ResolveWarning, TargetConfigResolver};
