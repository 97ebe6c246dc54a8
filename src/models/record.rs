//! Contact record model
//!
//! A record owns one name, an ordered list of phone numbers (duplicates are
//! allowed) and at most one birthday.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::{Birthday, Name, Phone};
use crate::error::{ContactsError, ContactsResult};

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name (immutable after creation)
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    /// Optional birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
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

    /// Validate and append a phone number
    pub fn add_phone(&mut self, value: &str) -> ContactsResult<()> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Find a phone by exact match
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Replace `old` with `new`, keeping its position
    ///
    /// The record is left untouched if `old` is missing or `new` is invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactsResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| ContactsError::phone_not_found(old))?;
        let phone = Phone::new(new)?;
        self.phones[index] = phone;
        Ok(())
    }

    /// Remove the first matching phone
    ///
    /// Returns whether a phone was removed; a missing phone is not an error.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.position_of(value) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, value: &str) -> ContactsResult<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Next occurrence of the birthday on or after `today`
    pub fn next_birthday(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.birthday.and_then(|b| b.next_occurrence(today))
    }

    /// Days from `today` until the next birthday (0 means today)
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.next_birthday(today).map(|next| (next - today).num_days())
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "none".to_string()
        } else {
            join_phones(&self.phones)
        };
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "none".to_string());

        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name, phones, birthday
        )
    }
}

/// Join phones with `"; "` for display
pub fn join_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}
