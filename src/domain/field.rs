//! Generic validated field.

use super::birthday::Birthday;
use crate::error::{FieldKind, ValidationError, ValidationResult};
use chrono::NaiveDateTime;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A value offered to a field before validation.
///
/// Fields accept different kinds of input (a phone number may be given as
/// text or as an integer), so candidates arrive in this dynamic form and each
/// [`FieldRule`] decides which kinds it understands.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    DateTime(NaiveDateTime),
    Birthday(Birthday),
}

impl FieldValue {
    /// Short name of the value kind, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::DateTime(_) => "date-time",
            Self::Birthday(_) => "birthday",
        }
    }

    /// Build the mismatch error for a field expecting `expected`.
    pub(crate) fn mismatch(&self, field: FieldKind, expected: &'static str) -> ValidationError {
        ValidationError::TypeMismatch {
            field,
            expected,
            found: self.kind(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Integer(v),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Birthday> for FieldValue {
    fn from(value: Birthday) -> Self {
        Self::Birthday(value)
    }
}

/// Validation rule backing a [`ValidatedField`].
///
/// `accept` performs the whole pipeline for a candidate: the kind check,
/// any normalization, and the constraint check.
pub trait FieldRule {
    /// Stored representation.
    type Value;

    /// Field this rule guards, for error reporting.
    const FIELD: FieldKind;

    fn accept(&self, input: FieldValue) -> ValidationResult<Self::Value>;
}

/// A value that always satisfies its rule.
///
/// The rule is part of the type, so a field can only ever be written through
/// rules of type `R`. Writes go through [`ValidatedField::set`]; a rejected
/// candidate leaves the previous value in place.
///
/// A field validated as a phone cannot be overwritten through the name rule,
/// even though both store a `String`:
///
/// ```compile_fail
/// use contact_book::domain::{NameRule, PhoneRule, ValidatedField};
///
/// let mut field = ValidatedField::new("5551234567", &PhoneRule).unwrap();
/// field.set("Vasya", &NameRule).unwrap();
/// ```
pub struct ValidatedField<R: FieldRule> {
    value: R::Value,
    rule: PhantomData<fn() -> R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Validate `input` with `rule` and wrap the result.
    pub fn new(input: impl Into<FieldValue>, rule: &R) -> ValidationResult<Self> {
        let value = rule.accept(input.into())?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Current value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Convert into the underlying value.
    pub fn into_value(self) -> R::Value {
        self.value
    }

    /// Replace the value if `input` passes `rule`.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError`; the stored value is unchanged.
    pub fn set(&mut self, input: impl Into<FieldValue>, rule: &R) -> ValidationResult<()> {
        self.value = rule.accept(input.into())?;
        Ok(())
    }
}

// Manual impls: bounds belong on the stored value, not on the rule marker
impl<R: FieldRule> Clone for ValidatedField<R>
where
    R::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: FieldRule> PartialEq for ValidatedField<R>
where
    R::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for ValidatedField<R> where R::Value: Eq {}

impl<R: FieldRule> Hash for ValidatedField<R>
where
    R::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: FieldRule> fmt::Debug for ValidatedField<R>
where
    R::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("field", &R::FIELD)
            .field("value", &self.value)
            .finish()
    }
}
