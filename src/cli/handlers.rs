//! Command handlers
//!
//! Each handler turns parsed arguments into an address book operation and
//! returns the reply text. Argument-count, validation and lookup failures
//! come back as `Err` and are rendered once, by [`render`], as
//! `Error: <message>`.

use chrono::NaiveDate;

use super::parser::Command;
use crate::display::{format_contact_list, format_phones, format_upcoming_birthdays};
use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Name, Record};

const CONTACT_NOT_FOUND: &str = "Contact not found.";
const BIRTHDAY_NOT_FOUND: &str = "Birthday not found.";

/// Render a handler result for display, never failing
pub fn render(result: ContactsResult<String>) -> String {
    result.unwrap_or_else(|e| format!("Error: {}", e))
}

/// `add <name> <phone>`: create the contact if needed, then append the phone
pub fn add_contact(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, phone] = leading_args::<2>(args, Command::Add)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // Only insert once the phone is known to be valid
    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, old_phone, new_phone] = exact_args::<3>(args, Command::Change)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    record.edit_phone(old_phone, new_phone)?;
    Ok("Phone updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> ContactsResult<String> {
    let [name] = leading_args::<1>(args, Command::Phone)?;

    Ok(book
        .find(name)
        .map(format_phones)
        .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string()))
}

/// `remove-phone <name> <phone>`; removing an absent phone is a no-op
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, phone] = exact_args::<2>(args, Command::RemovePhone)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    record.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, date] = exact_args::<2>(args, Command::AddBirthday)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };
    record.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> ContactsResult<String> {
    let [name] = leading_args::<1>(args, Command::ShowBirthday)?;

    Ok(book
        .find(name)
        .and_then(Record::birthday)
        .map(|b| b.to_string())
        .unwrap_or_else(|| BIRTHDAY_NOT_FOUND.to_string()))
}

/// `birthdays`: greetings due within `window_days` of `today`
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> String {
    format_upcoming_birthdays(&book.upcoming_birthdays(today, window_days))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    format_contact_list(book)
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name] = exact_args::<1>(args, Command::Delete)?;

    Ok(match book.delete(name) {
        Some(_) => "Contact deleted.".to_string(),
        None => CONTACT_NOT_FOUND.to_string(),
    })
}

/// `help`
pub fn help() -> String {
    let width = Command::ALL
        .iter()
        .map(|c| c.usage().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(Command::ALL.iter().map(|c| {
        format!(
            "  {:<width$}  {}",
            c.usage(),
            c.description(),
            width = width
        )
    }));
    lines.join("\n")
}

/// Exactly `N` arguments
fn exact_args<const N: usize>(args: &[String], command: Command) -> ContactsResult<[&str; N]> {
    let args: &[String; N] = args.try_into().map_err(|_| ContactsError::ArgumentCount {
        usage: command.usage(),
    })?;
    Ok(args.each_ref().map(String::as_str))
}

/// The first `N` arguments; extra arguments are ignored
fn leading_args<const N: usize>(args: &[String], command: Command) -> ContactsResult<[&str; N]> {
    match args.get(..N) {
        Some(leading) => exact_args(leading, command),
        None => Err(ContactsError::ArgumentCount {
            usage: command.usage(),
        }),
    }
}
