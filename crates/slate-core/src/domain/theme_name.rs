//! Theme name validation.
//!
//! Scaffolded themes become packages in the front-end ecosystem, so their
//! names must satisfy the package-registry naming rules up front. Parsing
//! happens exactly once; the rest of the crate only ever sees a valid
//! [`ThemeName`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A validated theme (package) name.
///
/// Invariants, checked by [`ThemeName::parse`]:
/// - non-empty, at most [`ThemeName::MAX_LENGTH`] characters
/// - no uppercase letters, no whitespace
/// - does not start with `.` or `_`
/// - characters restricted to `a-z`, `0-9`, `-`, `_`, `.`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeName(String);

impl ThemeName {
    /// Package registries cap names at 214 characters.
    pub const MAX_LENGTH: usize = 214;

    /// Validate `raw` against the naming rules.
    ///
    /// Invalid names are a fatal input error, never silently corrected.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidThemeName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if raw.len() > Self::MAX_LENGTH {
            return Err(invalid("name cannot contain more than 214 characters"));
        }
        if raw.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if raw.starts_with('_') {
            return Err(invalid("name cannot start with '_'"));
        }
        if raw.chars().any(|c| c.is_whitespace()) {
            return Err(invalid("name cannot contain spaces"));
        }
        if raw.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(invalid("name cannot contain capital letters"));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')))
        {
            return Err(invalid(&format!("name cannot contain '{bad}'")));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ThemeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ThemeName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ThemeName> for String {
    fn from(name: ThemeName) -> Self {
        name.0
    }
}
