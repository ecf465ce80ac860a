//! Integration tests for building and editing contact records.

mod common;

use common::*;
use contact_book::{
    Birthday, FieldKind, FieldValue, Name, Phone, Record, RecordError, ValidationError,
};

#[test]
fn test_reference_contact_renderings() {
    let record = sample_vasya();

    assert_eq!(record.name().to_string(), "Vasya");
    assert_eq!(format!("{:?}", record.name()), "Name(Vasya)");
    assert_eq!(record.phones()[0].to_string(), "380967008090");
    assert_eq!(format!("{:?}", record.phones()[1]), "Phone('45632376335')");
    assert_eq!(record.birthday().unwrap().to_string(), "15.10.1996");
    assert_eq!(
        record.to_string(),
        "Vasya               |  15.10.1996  |  380967008090, 45632376335"
    );
    assert_eq!(
        format!("{:?}", record),
        "Record(Name(Vasya), [Phone('380967008090'), Phone('45632376335')], Birthday(1996-10-15T02:34:00))"
    );
}

#[test]
fn test_validation_errors_by_field() {
    let cases: Vec<(ValidationError, FieldKind)> = vec![
        (Name::new("a").unwrap_err(), FieldKind::Name),
        (Name::new("Jo Jo").unwrap_err(), FieldKind::Name),
        (Phone::new("12-34").unwrap_err(), FieldKind::Phone),
        (Phone::new("12345ab").unwrap_err(), FieldKind::Phone),
        (
            Birthday::new(datetime(3000, 1, 1, 0, 0)).unwrap_err(),
            FieldKind::Birthday,
        ),
        (
            Birthday::new(datetime(1800, 1, 1, 0, 0)).unwrap_err(),
            FieldKind::Birthday,
        ),
    ];

    for (err, field) in cases {
        assert_eq!(err.field(), field, "{}", err);
        assert!(!err.is_type_mismatch());
    }
}

#[test]
fn test_type_mismatches() {
    let born = datetime(1990, 1, 1, 0, 0);

    assert!(Name::new(12345i64).unwrap_err().is_type_mismatch());
    assert!(Name::new(born).unwrap_err().is_type_mismatch());
    assert!(Phone::new(born).unwrap_err().is_type_mismatch());
    assert!(Birthday::new("01.01.1990").unwrap_err().is_type_mismatch());
    assert!(Birthday::new(19900101i64).unwrap_err().is_type_mismatch());

    let birthday = Birthday::new(born).unwrap();
    assert_eq!(Birthday::new(birthday.clone()).unwrap(), birthday);
    assert_eq!(
        Phone::new(FieldValue::Birthday(birthday)).unwrap_err(),
        ValidationError::TypeMismatch {
            field: FieldKind::Phone,
            expected: "text or integer",
            found: "birthday",
        }
    );
}

#[test]
fn test_phone_editing_lifecycle() {
    let mut record = Record::new(Name::new("Olga").unwrap());
    let home = Phone::new("044 123 45 67").unwrap();
    let work = Phone::new("+1 (555) 000-1111").unwrap();

    record.add_phone(home.clone());
    record.add_phone(work.clone());
    record.add_phone(home.clone());
    assert_eq!(record.phones().len(), 3);

    record.delete_phone(&home).unwrap();
    assert_eq!(record.phones(), &[work.clone(), home.clone()]);

    record.change_phone(&work, "0501112233").unwrap();
    assert_eq!(record.phones()[0].as_str(), "0501112233");

    let err = record.delete_phone(&work).unwrap_err();
    assert_eq!(
        err,
        RecordError::PhoneNotFound {
            name: "Olga".to_string(),
            phone: "15550001111".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Olga does not have such phone number 15550001111");

    record.delete_all_phones();
    assert!(record.phones().is_empty());
}

#[test]
fn test_birthday_assignment_quirk() {
    let mut record = sample_vasya();
    let original = record.birthday().cloned();

    assert!(!record.set_birthday(datetime(2000, 2, 2, 0, 0)));
    assert!(!record.set_birthday("02.02.2000"));
    assert_eq!(record.birthday().cloned(), original);

    let replacement = Birthday::new(datetime(2000, 2, 2, 0, 0)).unwrap();
    assert!(record.set_birthday(replacement.clone()));
    assert_eq!(record.birthday(), Some(&replacement));
}

#[test]
fn test_days_to_birthday_presence() {
    let without = sample_record("Petya", &["1234567"]);
    assert_eq!(without.days_to_birthday(), None);

    let days = sample_vasya().days_to_birthday().unwrap();
    assert!((0..=366).contains(&days));
}
