use serde::{Deserialize, Serialize};

/// Manual identity override for a player whose registrations vary too much
/// for automatic matching.
///
/// Any result whose name or handle contains one of the `aliases` (compared
/// lowercase and trimmed) is grouped under this player, and the ranking shows
/// `name` / `username` verbatim.
///
/// Overrides live in the `overrides` section of the config file:
///
/// ```json
/// { "name": "Kazuya", "username": "kazuya_m", "aliases": ["kazuya", "mishima"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityOverride {
    pub name: String,
    pub username: String,
    pub aliases: Vec<String>,
}

impl IdentityOverride {
    pub fn new(name: &str, username: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            username: username.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}
