//! Contact Book - an in-memory contact directory.
//!
//! Stores people's names, phone numbers and birthdays, validates every field
//! on assignment, counts the days until a contact's next birthday and renders
//! the collection as a sorted, paginated listing.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phones, birthdays)
//! - **models**: The contact record built from those values
//! - **book**: The name-keyed address book and its page iterator
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, FieldValue, Name, Phone, ValidatedField};
pub use error::{BookError, ConfigError, FieldKind, RecordError, ValidationError};
pub use models::Record;
