//! Core data models for the contact manager
//!
//! This module contains the data structures that represent the contact
//! domain: validated field values, contact records and the address book.

pub mod address_book;
pub mod fields;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_UPCOMING_WINDOW_DAYS};
pub use fields::{Birthday, FieldValidationError, Name, Phone, BIRTHDAY_FORMAT};
pub use record::Record;
