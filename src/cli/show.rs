//! Show command implementation

use std::path::Path;

use anyhow::{Context, Result};

use targetrules::config::RawTargetDeclaration;
use targetrules::TargetConfigResolver;

/// Resolve one declaration and print its canonical form as TOML.
pub fn show_command(file: &Path) -> Result<()> {
    let raw = RawTargetDeclaration::from_file(file)?;
    let resolution = TargetConfigResolver::new()
        .resolve(&raw)
        .with_context(|| format!("Failed to resolve target file: {}", file.display()))?;

    for warning in &resolution.warnings {
        tracing::warn!("{warning}");
    }

    let rendered = toml::to_string_pretty(&resolution.configuration)
        .with_context(|| "Failed to serialize canonical configuration")?;
    print!("{rendered}");
    Ok(())
}
