use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::Serialize;

use crate::parser::{ParseError, parse_key};

/// A validated dotted key such as `user.notifications`.
///
/// Every segment is an identifier: an ASCII letter or underscore followed by
/// word characters, or a bare run of digits.
///
/// ```
/// use glossa::Key;
///
/// let key = Key::parse("user.items.0").unwrap();
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["user", "items", "0"]);
/// assert!(Key::parse("user name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Validate and wrap a dotted key.
    pub fn parse(input: &str) -> Result<Key, ParseError> {
        parse_key(input)?;
        Ok(Key(input.to_string()))
    }

    /// The key as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the key's identifier segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl FromStr for Key {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::parse(s)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
