//! Authenticated principals.
//!
//! Token issuance and verification happen elsewhere. What reaches this crate
//! is the principal's attribute map, in which `age` is a string-encoded
//! integer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Error returned when a principal's age attribute is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAge {
    /// The principal has no `age` attribute
    #[error("principal has no age attribute")]
    Missing,

    /// The `age` attribute is not a non-negative integer
    #[error("invalid age {0:?}: must be a non-negative integer")]
    NotANumber(String),
}

/// The attributes of an authenticated principal.
///
/// Deserializes from a flat JSON object of string values:
///
/// ```
/// use subway_line::auth::Principal;
///
/// let principal: Principal = serde_json::from_str(r#"{"email": "a@b.c", "age": "12"}"#).unwrap();
/// assert_eq!(principal.age(), Ok(12));
/// assert_eq!(principal.attribute("email"), Some("a@b.c"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal {
    attributes: HashMap<String, String>,
}

impl Principal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the updated principal.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Parses the `age` attribute.
    pub fn age(&self) -> Result<u32, InvalidAge> {
        let raw = self.attribute("age").ok_or(InvalidAge::Missing)?;
        raw.trim()
            .parse::<u32>()
            .map_err(|_| InvalidAge::NotANumber(raw.to_string()))
    }
}
