use std::fmt;
use std::fmt::Display;

/// Dictionary key, either a string or a signed integer.
///
/// The distinction is semantic, not cosmetic: integer keys carry list-like
/// append behavior during merges, string keys carry dictionary-like identity.
/// Callers must not coerce one into the other.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum Key {
    String(String),
    Number(i64),
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(key) => write!(f, "{}", key),
            Key::Number(key) => write!(f, "{}", key),
        }
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::String(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key::String(key)
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Key::Number(key)
    }
}
