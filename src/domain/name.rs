//! Name value object.

use super::field::{FieldRule, FieldValue, ValidatedField};
use crate::error::{FieldKind, ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of characters in a name.
pub const MIN_NAME_LEN: usize = 2;

/// Rule for [`Name`]: text of at least two letters or digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;
    const FIELD: FieldKind = FieldKind::Name;

    fn accept(&self, input: FieldValue) -> ValidationResult<String> {
        let value = match input {
            FieldValue::Text(value) => value,
            other => return Err(other.mismatch(Self::FIELD, "text")),
        };

        if value.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort {
                value,
                min: MIN_NAME_LEN,
            });
        }

        if !value.chars().all(char::is_alphanumeric) {
            return Err(ValidationError::NameCharacters(value));
        }

        Ok(value)
    }
}

/// A contact's name.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("Vasya").unwrap();
/// assert_eq!(name.as_str(), "Vasya");
/// assert!(Name::new("a").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(ValidatedField<NameRule>);

impl Name {
    /// Create a new Name.
    ///
    /// # Validation Rules
    ///
    /// - Must be text
    /// - Must be at least 2 characters long
    /// - Letters and digits only (no spaces or punctuation)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TypeMismatch`, `NameTooShort` or `NameCharacters`.
    pub fn new(name: impl Into<FieldValue>) -> ValidationResult<Self> {
        ValidatedField::new(name, &NameRule).map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_value()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.as_str())
    }
}
