//! Owned string payload.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Immutable owned UTF-8 string held by a [`Value`](super::Value) or used
/// as an object key.
///
/// Equality is byte-exact. The contents can only change by replacing the
/// whole string.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonString(Box<str>);

impl JsonString {
    /// Create an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the contents as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrow the raw UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a `String` without copying.
    pub fn into_string(self) -> String {
        self.0.into_string()
    }
}

impl Deref for JsonString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JsonString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for JsonString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for JsonString {
    fn from(s: String) -> Self {
        Self(s.into_boxed_str())
    }
}

impl From<JsonString> for String {
    fn from(s: JsonString) -> Self {
        s.into_string()
    }
}

impl PartialEq<str> for JsonString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for JsonString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
