//! Core domain types for targetrules

mod build_settings;
mod configuration;
mod target_type;

pub use build_settings::BuildSettingsVersion;
pub use configuration::TargetConfiguration;
pub use target_type::TargetType;

/// Charset check shared by target and module names: ASCII alphabetic first
/// character, then alphanumerics or underscores.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_plain_names() {
        assert!(is_identifier("Joyship2"));
        assert!(is_identifier("Core_Online"));
        assert!(is_identifier("a"));
    }

    #[test]
    fn test_identifier_rejects_bad_tokens() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("   "));
        assert!(!is_identifier("2Fast"));
        assert!(!is_identifier("_Hidden"));
        assert!(!is_identifier("My Module"));
        assert!(!is_identifier("Core-Online"));
    }
}
