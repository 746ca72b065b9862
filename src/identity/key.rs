use serde::Serialize;
use std::fmt;

/// Bucket a result is grouped under.
///
/// Ordering is total so grouped maps iterate the same way on every run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PlayerKey {
    /// Forced by a manual identity override
    Override(String),
    /// Challonge numeric user id
    UserId(u64),
    /// Normalized name/handle combination
    Alias(String),
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKey::Override(key) => write!(f, "override:{key}"),
            PlayerKey::UserId(id) => write!(f, "id:{id}"),
            PlayerKey::Alias(key) => write!(f, "{key}"),
        }
    }
}

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// String key for a result with no usable numeric identity.
///
/// Empty handle → name. One string containing the other → handle (same
/// entity). Otherwise both, joined, so near-collisions stay apart.
pub fn fallback_key(name: &str, handle: &str) -> String {
    let name = normalize(name);
    let handle = normalize(handle);

    if handle.is_empty() {
        return name;
    }

    if name.contains(&handle) || handle.contains(&name) {
        return handle;
    }

    format!("{name}|{handle}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_handle_keys_on_name() {
        assert_eq!(fallback_key("  Jin Kazama ", ""), "jin kazama");
        assert_eq!(fallback_key("Jin Kazama", "   "), "jin kazama");
    }

    #[test]
    fn test_contained_strings_key_on_handle() {
        assert_eq!(fallback_key("Devil_Jin", "devil"), "devil");
        assert_eq!(fallback_key("Xiao", "XiaoYu_88"), "xiaoyu_88");
        assert_eq!(fallback_key("", "eddy"), "eddy");
    }

    #[test]
    fn test_unrelated_strings_are_joined() {
        assert_eq!(fallback_key("Bryan", "fury"), "bryan|fury");
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerKey::UserId(12).to_string(), "id:12");
        assert_eq!(PlayerKey::Override("heihachi".into()).to_string(), "override:heihachi");
        assert_eq!(PlayerKey::Alias("bryan|fury".into()).to_string(), "bryan|fury");
    }
}
