//! Typed CUID2 value.

use crate::error::{Cuid2Error, Result};
use crate::validate::is_valid;

/// A string known to satisfy the CUID2 format.
///
/// Constructed only by generation or by parsing a valid string, so every
/// `Cuid2` in memory is well formed. Serializes as the bare string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cuid2(String);

impl Cuid2 {
    /// Generates a default-length identifier from the default instance.
    pub fn new() -> Result<Self> {
        crate::generate().map(Self)
    }

    /// Generates an identifier of `length` characters from the default instance.
    pub fn with_length(length: usize) -> Result<Self> {
        crate::generate_with_length(length).map(Self)
    }

    /// Parses an identifier, rejecting anything that is not a valid CUID2.
    pub fn parse(s: &str) -> Result<Self> {
        if !is_valid(s) {
            return Err(Cuid2Error::InvalidFormat(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading letter.
    #[must_use]
    pub fn prefix(&self) -> char {
        // Valid identifiers always start with an ASCII letter
        char::from(self.0.as_bytes()[0])
    }

    /// Returns everything after the prefix letter.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.0[1..]
    }

    /// Returns the identifier length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; provided alongside [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the value and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Cuid2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cuid2 {
    type Err = Cuid2Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cuid2 {
    type Error = Cuid2Error;

    fn try_from(s: String) -> Result<Self> {
        if !is_valid(&s) {
            return Err(Cuid2Error::InvalidFormat(s));
        }
        Ok(Self(s))
    }
}

impl From<Cuid2> for String {
    fn from(id: Cuid2) -> Self {
        id.0
    }
}

impl AsRef<str> for Cuid2 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Cuid2 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Cuid2 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
