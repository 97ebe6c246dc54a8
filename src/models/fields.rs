//! Validated field values
//!
//! Each contact field is a distinct wrapper type that validates its input at
//! construction. Invalid input never produces a value, so anything holding a
//! `Phone` or `Birthday` can rely on it being well-formed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Textual format used for birthdays, both for input and display
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_LENGTH: usize = 10;

/// A contact's name, used as the address book key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FieldValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A phone number of exactly ten decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validate and wrap a phone number
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if value.len() != PHONE_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldValidationError::InvalidPhone);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Phone {
    type Err = FieldValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birthday, entered and displayed as `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`
    ///
    /// The shape is checked strictly (two-digit day and month, four-digit
    /// year) before the calendar date itself is validated.
    pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
        if !has_birthday_shape(value) {
            return Err(FieldValidationError::InvalidBirthday);
        }

        // chrono accepts year 0, the Gregorian calendar has none
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
            .map(Self)
            .ok_or(FieldValidationError::InvalidBirthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's occurrence in the given year
    ///
    /// Feb 29 is clamped to Feb 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
    }

    /// The next occurrence of this birthday on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

fn has_birthday_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = FieldValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

/// Validation errors for contact fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    EmptyName,
    InvalidPhone,
    InvalidBirthday,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone => write!(f, "phone must be exactly 10 digits"),
            Self::InvalidBirthday => write!(f, "invalid date format, expected DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for FieldValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_phone() {
        let phone = Phone::new("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
        assert_eq!(phone.to_string(), "0123456789");
    }

    #[test]
    fn test_invalid_phones() {
        for bad in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "+123456789",
            "123 456 78",
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            assert_eq!(
                Phone::new(bad),
                Err(FieldValidationError::InvalidPhone),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_birthday() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(birthday.date(), date(1990, 6, 15));
        assert_eq!(birthday.to_string(), "15.06.1990");
    }

    #[test]
    fn test_leap_day_birthday_parses() {
        assert!(Birthday::parse("29.02.2000").is_ok());
        assert!(Birthday::parse("29.02.2001").is_err());
    }

    #[test]
    fn test_earliest_year_accepted() {
        let birthday = Birthday::parse("01.01.0001").unwrap();
        assert_eq!(birthday.date(), date(1, 1, 1));
    }

    #[test]
    fn test_invalid_birthdays() {
        for bad in [
            "",
            "1990-06-15",
            "15/06/1990",
            "5.6.1990",
            "15.6.1990",
            "15.06.90",
            "32.01.1990",
            "31.04.1990",
            "00.01.1990",
            "15.13.1990",
            "15.06.1990 ",
            "01.01.0000",
        ] {
            assert_eq!(
                Birthday::parse(bad),
                Err(FieldValidationError::InvalidBirthday),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 10)),
            Some(date(2024, 6, 15))
        );
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 15)),
            Some(date(2024, 6, 15))
        );
    }

    #[test]
    fn test_next_occurrence_already_passed() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 16)),
            Some(date(2025, 6, 15))
        );
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday.in_year(2024), Some(date(2024, 2, 29)));
        assert_eq!(
            birthday.next_occurrence(date(2023, 3, 1)),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Name::new("  "), Err(FieldValidationError::EmptyName));
        assert_eq!(Name::new("Alice").unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_serde_revalidates() {
        let phone: Result<Phone, _> = serde_json::from_str("\"12345\"");
        assert!(phone.is_err());

        let birthday: Birthday = serde_json::from_str("\"01.01.2000\"").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.01.2000\"");
    }
}
