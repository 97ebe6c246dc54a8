//! Address book model
//!
//! Maps contact names to records and computes upcoming birthday greetings.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

use super::record::Record;

/// Default look-ahead window for upcoming birthdays, in days
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls within the upcoming window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Weekend-adjusted date on which to send the greeting
    pub congratulation_date: NaiveDate,
}

/// All contacts, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().as_str().to_string(), record)
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record, returning it if it existed
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records ordered by name
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays occurring within `window_days` of `today` (inclusive)
    ///
    /// Greetings that would land on a weekend move to the following Monday.
    /// Results are ordered by congratulation date, then name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<_> = self
            .records
            .values()
            .filter_map(|record| {
                let next = record.next_birthday(today)?;
                let days = (next - today).num_days();
                (0..=window_days).contains(&days).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: shift_off_weekend(next),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

/// Move Saturday and Sunday to the following Monday
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            date + Duration::days(7 - i64::from(date.weekday().num_days_from_monday()))
        }
        _ => date,
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
