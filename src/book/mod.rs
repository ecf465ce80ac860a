//! The address book and its paginated listing.
//!
//! This module provides the name-keyed record collection together with the
//! page iterator used to display it a few records at a time.

pub mod address_book;
pub mod pages;

pub use address_book::{format_line, AddressBook, DEFAULT_PAGE_SIZE, HEADER, SEPARATOR};
pub use pages::Pages;
