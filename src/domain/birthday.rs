//! Birthday value object.

use super::field::{FieldRule, FieldValue, ValidatedField};
use crate::error::{FieldKind, ValidationError, ValidationResult};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Largest accepted difference between the current year and the birth year.
pub const MAX_AGE_YEARS: i32 = 150;

/// Rule for [`Birthday`]: a moment not after `now` and at most 150 years back.
#[derive(Debug, Clone, Copy)]
pub struct BirthdayRule {
    now: NaiveDateTime,
}

impl BirthdayRule {
    /// Validate against an explicit current moment.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Default for BirthdayRule {
    /// Validate against the local clock.
    fn default() -> Self {
        Self::at(Local::now().naive_local())
    }
}

impl FieldRule for BirthdayRule {
    type Value = NaiveDateTime;
    const FIELD: FieldKind = FieldKind::Birthday;

    fn accept(&self, input: FieldValue) -> ValidationResult<NaiveDateTime> {
        let value = match input {
            FieldValue::DateTime(value) => value,
            FieldValue::Birthday(birthday) => birthday.value(),
            other => return Err(other.mismatch(Self::FIELD, "date-time")),
        };

        if value > self.now {
            return Err(ValidationError::BirthdayInFuture(value));
        }

        let years = self.now.year() - value.year();
        if years > MAX_AGE_YEARS {
            return Err(ValidationError::BirthdayTooOld { value, years });
        }

        Ok(value)
    }
}

/// A contact's date of birth.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let born = NaiveDate::from_ymd_opt(1996, 10, 15)
///     .unwrap()
///     .and_hms_opt(2, 34, 0)
///     .unwrap();
/// let birthday = Birthday::new(born).unwrap();
/// assert_eq!(birthday.to_string(), "15.10.1996");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Birthday(ValidatedField<BirthdayRule>);

impl Birthday {
    /// Create a new Birthday, validated against the local clock.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BirthdayInFuture`, `BirthdayTooOld`, or
    /// `TypeMismatch` for input that is not a date-time.
    pub fn new(value: impl Into<FieldValue>) -> ValidationResult<Self> {
        ValidatedField::new(value, &BirthdayRule::default()).map(Self)
    }

    /// Create a new Birthday, validated against `now`.
    pub fn new_at(value: impl Into<FieldValue>, now: NaiveDateTime) -> ValidationResult<Self> {
        ValidatedField::new(value, &BirthdayRule::at(now)).map(Self)
    }

    /// The full date-time of birth.
    pub fn value(&self) -> NaiveDateTime {
        *self.0.value()
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        self.value().date()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = NaiveDateTime::deserialize(deserializer)?;
        Birthday::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value().format("%d.%m.%Y"))
    }
}

impl fmt::Debug for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Birthday({})", self.value().format("%Y-%m-%dT%H:%M:%S"))
    }
}
