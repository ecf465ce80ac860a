//! Address book: the keyed collection of records.

use super::pages::Pages;
use crate::config::Config;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN;

/// Line above and below the full listing.
pub const SEPARATOR: &str =
    "-----|---------------------|--------------|------------------------------";

/// Column titles of the full listing.
pub const HEADER: &str = "   # | Name                |  Birthday    |  Phones";

/// Render one listing line: 1-based sequence number and the record columns.
pub fn format_line(seq: usize, record: &Record) -> String {
    format!("{:>4} | {}", seq, record)
}

/// Records keyed by name.
///
/// Names are unique: adding a record whose name is already present replaces
/// the stored one. Listings are ordered by name.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Name, Phone, Record};
///
/// let mut book = AddressBook::with_page_size(2).unwrap();
/// for name in ["Vasya", "Anna", "Petya"] {
///     let record = Record::new(Name::new(name).unwrap())
///         .with_phone(Phone::new("1234567").unwrap());
///     book.add_record(record);
/// }
///
/// let pages: Vec<Vec<String>> = book.pages().collect();
/// assert_eq!(pages.len(), 2);
/// assert!(pages[0][0].contains("Anna"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
    page_size: NonZeroUsize,
}

impl AddressBook {
    /// Create an empty book with the default page size.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create an empty book returning `page_size` records per page.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is 0.
    pub fn with_page_size(page_size: usize) -> BookResult<Self> {
        let mut book = Self::new();
        book.set_page_size(page_size)?;
        Ok(book)
    }

    /// Create an empty book using the configured page size.
    pub fn from_config(config: &Config) -> BookResult<Self> {
        tracing::debug!(page_size = config.page_size, "Creating address book from config");
        Self::with_page_size(config.page_size)
    }

    /// Records per page for [`AddressBook::pages`].
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Change the number of records per page.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is 0; the current
    /// size is kept.
    pub fn set_page_size(&mut self, page_size: usize) -> BookResult<()> {
        self.page_size = validate_page_size(page_size)?;
        Ok(())
    }

    /// Insert a record under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key, record);

        if let Some(old) = &replaced {
            tracing::debug!(name = %old.name(), "Replaced existing record");
        } else {
            tracing::trace!(records = self.records.len(), "Added record");
        }

        replaced
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Look up a record by name, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has that name.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.get(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has that name.
    pub fn remove(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        tracing::debug!(name = %name, "Removed record");
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of distinct names in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Every record rendered as a numbered listing line, in name order.
    pub fn lines(&self) -> Vec<String> {
        self.records
            .values()
            .enumerate()
            .map(|(i, record)| format_line(i + 1, record))
            .collect()
    }

    /// Lines of page `index` (0-based) for pages of `page_size` lines.
    ///
    /// An index past the last page yields an empty page.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is 0.
    pub fn page(&self, page_size: usize, index: usize) -> BookResult<Vec<String>> {
        let page_size = validate_page_size(page_size)?.get();

        let start = index.saturating_mul(page_size);
        Ok(self
            .records
            .values()
            .enumerate()
            .skip(start)
            .take(page_size)
            .map(|(i, record)| format_line(i + 1, record))
            .collect())
    }

    /// Start a traversal with the configured page size.
    pub fn pages(&self) -> Pages {
        Pages::new(self.lines(), self.page_size)
    }

    /// Start a traversal with pages of `page_size` lines.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is 0.
    pub fn pages_of(&self, page_size: usize) -> BookResult<Pages> {
        let page_size = validate_page_size(page_size)?;
        Ok(Pages::new(self.lines(), page_size))
    }
}

fn validate_page_size(page_size: usize) -> BookResult<NonZeroUsize> {
    NonZeroUsize::new(page_size).ok_or(BookError::InvalidPageSize(page_size))
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Vec<String>;
    type IntoIter = Pages;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "{}", HEADER)?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", SEPARATOR)
    }
}

// Serde support - serialize as a list of records in name order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - rebuild the name index from the records
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
