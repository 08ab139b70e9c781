// SPDX-License-Identifier: MIT

//! Job identifier type.

use smol_str::SmolStr;

/// Unique identifier for a job record.
///
/// Generated IDs use the format `job-{nanoid}` (23 characters total, which
/// fits `SmolStr`'s inline capacity). Operator-chosen IDs of any shape are
/// also accepted; the job table is keyed by whatever string the record
/// was created with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct JobId(pub SmolStr);

impl JobId {
    pub const PREFIX: &'static str = "job-";

    /// Generate a new random ID with the type prefix
    pub fn new() -> Self {
        Self(SmolStr::new(format!("{}{}", Self::PREFIX, nanoid::nanoid!(19))))
    }

    /// Create ID from existing string (for parsing/deserialization)
    pub fn from_string(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the ID suffix (without prefix)
    pub fn suffix(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Returns a string slice of the suffix truncated to at most `n` characters.
    pub fn short(&self, n: usize) -> &str {
        let suffix = self.suffix();
        let end = std::cmp::min(n, suffix.len());
        &suffix[..end]
    }

    /// Returns true if the ID is an empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl From<&String> for JobId {
    fn from(s: &String) -> Self {
        Self::from_string(s.clone())
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for JobId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JobId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for JobId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for JobId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
