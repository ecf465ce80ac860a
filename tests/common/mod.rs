//! Test fixtures and sample data shared by the integration tests.
//!
//! Random contacts are drawn from proptest strategies through a
//! deterministic runner, so every run fills the book with the same data.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use contact_book::{AddressBook, Birthday, Config, Name, Phone, Record};
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use tracing_subscriber::EnvFilter;

/// Filter for the configured log level; an unparsable level falls back to "error".
pub fn log_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("error"))
}

/// Install a test-friendly tracing subscriber at the `LOG_LEVEL` level.
pub fn init_tracing() {
    let config = Config::from_env().unwrap_or_default();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config))
        .with_test_writer()
        .try_init();
}

pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// The reference contact: Vasya, two phones, born 15.10.1996 02:34.
pub fn sample_vasya() -> Record {
    let mut record = Record::new(Name::new("Vasya").unwrap())
        .with_phone(Phone::new("+38 (096) 700-80-90").unwrap())
        .with_birthday(Birthday::new(datetime(1996, 10, 15, 2, 34)).unwrap());
    record.add_phone(Phone::new(45632376335i64).unwrap());
    record
}

/// A record with the given name and phones and no birthday.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(Name::new(name).unwrap());
    for phone in phones {
        record.add_phone(Phone::new(*phone).unwrap());
    }
    record
}

/// Capitalized lowercase name of 3 to 18 letters.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,18}".prop_map(|s| {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}

/// Birth moment between 1900 and 2022; about a quarter of contacts have none.
fn birthday_strategy() -> impl Strategy<Value = Option<NaiveDateTime>> {
    let moment = (1900i32..=2022, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60)
        .prop_map(|(y, mo, d, h, mi)| datetime(y, mo, d, h, mi));
    prop_oneof![
        3 => moment.prop_map(Some),
        1 => Just(None),
    ]
}

fn draw<S: Strategy>(runner: &mut TestRunner, strategy: S) -> S::Value {
    strategy
        .new_tree(runner)
        .expect("strategy should produce a value")
        .current()
}

/// Fill a book with `count` generated contacts and `count * 3 / 2` phones
/// spread over them.
pub fn seeded_book(count: usize) -> AddressBook {
    let mut runner = TestRunner::deterministic();
    let mut book = AddressBook::new();

    for _ in 0..count {
        let name = draw(&mut runner, name_strategy());
        let mut record = Record::new(Name::new(name).unwrap());
        if let Some(born) = draw(&mut runner, birthday_strategy()) {
            record = record.with_birthday(Birthday::new(born).unwrap());
        }
        book.add_record(record);
    }

    let names: Vec<String> = book
        .records()
        .map(|record| record.name().to_string())
        .collect();
    for _ in 0..count * 3 / 2 {
        let phone = draw(&mut runner, "[0-9]{7,12}");
        let owner = draw(&mut runner, 0..names.len());
        book.get_mut(&names[owner])
            .unwrap()
            .add_phone(Phone::new(phone).unwrap());
    }

    book
}
