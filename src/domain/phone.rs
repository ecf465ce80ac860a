//! Phone value object.

use super::field::{FieldRule, FieldValue, ValidatedField};
use crate::error::{FieldKind, ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_LEN: usize = 7;

static PHONE_SEPARATORS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()\- ]").expect("Failed to compile phone separator regex"));

/// Strip formatting from a raw phone number.
///
/// Trims surrounding whitespace, drops one leading `+` and removes every
/// parenthesis, hyphen and space.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    PHONE_SEPARATORS_REGEX.replace_all(trimmed, "").into_owned()
}

/// Rule for [`Phone`]: text or integer that sanitizes to 7+ digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;
    const FIELD: FieldKind = FieldKind::Phone;

    fn accept(&self, input: FieldValue) -> ValidationResult<String> {
        let raw = match input {
            FieldValue::Text(value) => value,
            FieldValue::Integer(value) => value.to_string(),
            other => return Err(other.mismatch(Self::FIELD, "text or integer")),
        };

        let value = sanitize(&raw);

        if value.chars().count() < MIN_PHONE_LEN {
            return Err(ValidationError::PhoneTooShort {
                value,
                min: MIN_PHONE_LEN,
            });
        }

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PhoneCharacters(value));
        }

        Ok(value)
    }
}

/// A phone number stored as digits only.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+38 (096) 700-80-90").unwrap();
/// assert_eq!(phone.as_str(), "380967008090");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Phone(ValidatedField<PhoneRule>);

impl Phone {
    /// Create a new Phone from text or an integer.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneTooShort` or `PhoneCharacters` carrying
    /// the sanitized value, or `TypeMismatch` for other kinds of input.
    pub fn new(phone: impl Into<FieldValue>) -> ValidationResult<Self> {
        ValidatedField::new(phone, &PhoneRule).map(Self)
    }

    /// Replace the number in place, validating it through the same rule.
    ///
    /// On error the current number is kept.
    pub fn set_value(&mut self, phone: impl Into<FieldValue>) -> ValidationResult<()> {
        self.0.set(phone, &PhoneRule)
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_value()
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone('{}')", self.as_str())
    }
}
