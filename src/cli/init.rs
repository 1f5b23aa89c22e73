//! Init command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};

use targetrules::domain::is_identifier;

/// Template for a fresh target declaration.
const DECLARATION_TEMPLATE: &str = r#"# Build-target declaration
#
#   name           - target name, also the artifact's base name
#   type           - one of: Game, Editor, Client, Server, Program
#   build_settings - default build behaviors bundle: V1..V6, or Latest
#   extra_modules  - modules linked into this target beyond engine defaults

[target]
name = "{name}"
type = "Game"
build_settings = "Latest"
extra_modules = ["{name}"]
"#;

/// Scaffold `<NAME>.target.toml` in the current directory.
pub fn init_command(name: &str, force: bool) -> Result<()> {
    if !is_identifier(name) {
        bail!(
            "Invalid target name '{name}': use an ASCII letter followed by letters, digits, or underscores"
        );
    }

    let path = PathBuf::from(format!("{name}.target.toml"));
    if path.exists() && !force {
        bail!(
            "Declaration already exists: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let content = DECLARATION_TEMPLATE.replace("{name}", name);
    std::fs::write(&path, content)?;
    println!("Created: {}", path.display());

    Ok(())
}
