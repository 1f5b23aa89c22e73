//! Target artifact categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of artifact a target produces.
///
/// The set is closed: the orchestrator only knows how to drive these five
/// kinds of builds, so an unknown token is rejected at resolution instead of
/// flowing downstream as an open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// Standalone game executable
    Game,
    /// Editor host with the game modules loaded
    Editor,
    /// Networked client built without server-only code
    Client,
    /// Dedicated server built without client-only code
    Server,
    /// Standalone utility outside the engine runtime
    Program,
}

impl TargetType {
    /// Every recognized target type.
    pub const ALL: [TargetType; 5] = [
        TargetType::Game,
        TargetType::Editor,
        TargetType::Client,
        TargetType::Server,
        TargetType::Program,
    ];

    /// Parse a declaration token. Matching is case-sensitive and exact;
    /// "game" or "GAME" are authoring mistakes, not aliases.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Game" => Some(TargetType::Game),
            "Editor" => Some(TargetType::Editor),
            "Client" => Some(TargetType::Client),
            "Server" => Some(TargetType::Server),
            "Program" => Some(TargetType::Program),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Game => "Game",
            TargetType::Editor => "Editor",
            TargetType::Client => "Client",
            TargetType::Server => "Server",
            TargetType::Program => "Program",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_round_trips() {
        for ty in TargetType::ALL {
            assert_eq!(TargetType::from_token(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_from_token_is_case_sensitive() {
        assert_eq!(TargetType::from_token("game"), None);
        assert_eq!(TargetType::from_token("GAME"), None);
        assert_eq!(TargetType::from_token("Gaem"), None);
        assert_eq!(TargetType::from_token(""), None);
    }
}
