//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use chrono::NaiveDateTime;
use std::fmt;
use thiserror::Error;

/// The field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        };
        f.write_str(label)
    }
}

/// Errors raised when a value is rejected by a field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is of the wrong kind for the field
    #[error("Invalid {field}: expected {expected}, got {found}")]
    TypeMismatch {
        field: FieldKind,
        expected: &'static str,
        found: &'static str,
    },

    /// Name shorter than the allowed minimum
    #[error("Invalid name '{value}': must be at least {min} characters long")]
    NameTooShort { value: String, min: usize },

    /// Name contains something other than letters and digits
    #[error("Invalid name '{0}': only letters and digits are allowed")]
    NameCharacters(String),

    /// Phone shorter than the allowed minimum after sanitization
    #[error("Invalid phone '{value}': must contain at least {min} digits")]
    PhoneTooShort { value: String, min: usize },

    /// Phone contains non-digit characters after sanitization
    #[error("Invalid phone '{0}': only digits are allowed")]
    PhoneCharacters(String),

    /// Birthday lies after the current moment
    #[error("Invalid birthday {0}: date is in the future")]
    BirthdayInFuture(NaiveDateTime),

    /// Birthday implies an implausible age
    #[error("Invalid birthday {value}: age of {years} years exceeds the limit")]
    BirthdayTooOld { value: NaiveDateTime, years: i32 },
}

impl ValidationError {
    /// The field that rejected the value.
    pub fn field(&self) -> FieldKind {
        match self {
            Self::TypeMismatch { field, .. } => *field,
            Self::NameTooShort { .. } | Self::NameCharacters(_) => FieldKind::Name,
            Self::PhoneTooShort { .. } | Self::PhoneCharacters(_) => FieldKind::Phone,
            Self::BirthdayInFuture(_) | Self::BirthdayTooOld { .. } => FieldKind::Birthday,
        }
    }

    /// Whether the value was rejected for its kind rather than its content.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// Errors raised by operations on a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone to delete or change is not on the record
    #[error("{name} does not have such phone number {phone}")]
    PhoneNotFound { name: String, phone: String },

    /// The replacement value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised by the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the name
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Pages must hold at least one record
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
