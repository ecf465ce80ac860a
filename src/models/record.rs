//! Record model representing one contact in the book.

use crate::domain::{Birthday, FieldValue, Name, Phone};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the name column in rendered records.
pub const NAME_WIDTH: usize = 20;

/// Width of the birthday column in rendered records.
pub const BIRTHDAY_WIDTH: usize = 12;

/// A contact: a name, any number of phones and an optional birthday.
///
/// The name is bound at construction and has no setter.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Add an initial phone.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Set the initial birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if the record has no such phone.
    pub fn delete_phone(&mut self, phone: &Phone) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| phone_not_found(&self.name, phone))?;

        self.phones.remove(index);
        tracing::debug!(name = %self.name, phone = %phone, "Deleted phone");
        Ok(())
    }

    /// Remove every phone.
    pub fn delete_all_phones(&mut self) {
        tracing::debug!(name = %self.name, count = self.phones.len(), "Deleting all phones");
        self.phones.clear();
    }

    /// Replace the value of the first phone equal to `phone`.
    ///
    /// The stored phone is updated in place, so it keeps its position.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if the record has no such phone,
    /// or `RecordError::Validation` if `new_value` is rejected. In both cases
    /// the record is unchanged.
    pub fn change_phone(
        &mut self,
        phone: &Phone,
        new_value: impl Into<FieldValue>,
    ) -> RecordResult<()> {
        let target = self
            .phones
            .iter_mut()
            .find(|p| *p == phone)
            .ok_or_else(|| phone_not_found(&self.name, phone))?;

        target.set_value(new_value)?;
        tracing::debug!(name = %self.name, old = %phone, new = %target, "Changed phone");
        Ok(())
    }

    /// Replace the birthday with an already validated [`Birthday`].
    ///
    /// Any other kind of value is ignored and the current birthday is kept.
    /// Returns whether the birthday was replaced.
    pub fn set_birthday(&mut self, value: impl Into<FieldValue>) -> bool {
        match value.into() {
            FieldValue::Birthday(birthday) => {
                tracing::debug!(name = %self.name, birthday = %birthday, "Setting birthday");
                self.birthday = Some(birthday);
                true
            }
            other => {
                tracing::debug!(
                    name = %self.name,
                    kind = other.kind(),
                    "Ignoring birthday assignment that is not a Birthday"
                );
                false
            }
        }
    }

    /// Remove the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today (local date) until the next birthday.
    ///
    /// Returns `None` if no birthday is set, `Some(0)` on the birthday itself.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date();

        let this_year = anniversary(born, today.year())?;
        let next = if this_year >= today {
            this_year
        } else {
            anniversary(born, today.year() + 1)?
        };

        Some((next - today).num_days())
    }
}

/// The birthday's month and day in `year`.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    born.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

fn phone_not_found(name: &Name, phone: &Phone) -> RecordError {
    RecordError::PhoneNotFound {
        name: name.to_string(),
        phone: phone.to_string(),
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "{:<name_w$.name_w$}|  {:<bday_w$}|  {}",
            self.name.as_str(),
            birthday,
            phones,
            name_w = NAME_WIDTH,
            bday_w = BIRTHDAY_WIDTH,
        )
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({:?}, {:?}, ", self.name, self.phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{:?})", birthday),
            None => f.write_str("None)"),
        }
    }
}
