//! Versions command implementation

use targetrules::TargetConfigResolver;

/// List the build-settings versions this resolver build recognizes.
pub fn versions_command() {
    let resolver = TargetConfigResolver::new();
    let newest = resolver.known_versions().last().copied();

    for version in resolver.known_versions() {
        if Some(*version) == newest {
            println!("{version} (Latest)");
        } else {
            println!("{version}");
        }
    }
}
