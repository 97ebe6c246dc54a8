//! Display formatting for terminal output

pub mod contact;

pub use contact::{format_contact_list, format_phones, format_upcoming_birthdays};
