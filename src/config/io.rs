//! Declaration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{RawTargetDeclaration, TargetDeclarationFile};

impl RawTargetDeclaration {
    /// Load a declaration from a `*.target.toml` file.
    ///
    /// I/O and TOML syntax failures surface here; token validation is the
    /// resolver's job.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read target file: {}", path.display()))?;

        let file: TargetDeclarationFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse target file: {}", path.display()))?;

        Ok(file.target)
    }
}

/// Find every `*.target.toml` under a directory, sorted by path so batch
/// reports come out in a stable order.
pub fn discover_declarations(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("**/*.target.toml");
    let pattern = pattern.to_string_lossy();

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)
        .with_context(|| format!("Invalid declaration search pattern: {pattern}"))?
    {
        let path = entry.with_context(|| "Failed to read directory entry during discovery")?;
        paths.push(path);
    }

    paths.sort();
    tracing::debug!("Discovered {} target declarations", paths.len());
    Ok(paths)
}
