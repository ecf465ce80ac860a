//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from:
//! names, phone numbers and birthdays. Each value object runs its rule at
//! construction time and on every write, so invalid data cannot be
//! represented in a record.

pub mod birthday;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule};
pub use field::{FieldRule, FieldValue, ValidatedField};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
