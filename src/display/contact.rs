//! Contact display formatting
//!
//! Formats contacts and birthday reminders for line-oriented terminal output.

use crate::models::record::join_phones;
use crate::models::{AddressBook, Record, UpcomingBirthday, BIRTHDAY_FORMAT};

/// One line per contact, ordered by name
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }

    book.records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A contact's phones joined with `"; "`
pub fn format_phones(record: &Record) -> String {
    if record.phones().is_empty() {
        return "No phones.".to_string();
    }

    join_phones(record.phones())
}

/// One `name: DD.MM.YYYY` line per upcoming greeting
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(|u| {
            format!(
                "{}: {}",
                u.name,
                u.congratulation_date.format(BIRTHDAY_FORMAT)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
