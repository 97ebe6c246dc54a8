//! Diff generation for audit logging
//!
//! Summarises what changed between two versions of a contact.

use crate::models::record::join_phones;
use crate::models::Record;

/// Describe field changes between two versions of a record
///
/// Returns `None` when nothing changed.
pub fn describe_changes(before: &Record, after: &Record) -> Option<String> {
    let mut changes = Vec::new();

    if before.phones() != after.phones() {
        changes.push(format!(
            "phones: {} -> {}",
            phones_or_none(before),
            phones_or_none(after)
        ));
    }

    if before.birthday() != after.birthday() {
        changes.push(format!(
            "birthday: {} -> {}",
            birthday_or_none(before),
            birthday_or_none(after)
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn phones_or_none(record: &Record) -> String {
    if record.phones().is_empty() {
        "none".to_string()
    } else {
        join_phones(record.phones())
    }
}

fn birthday_or_none(record: &Record) -> String {
    record
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "none".to_string())
}
