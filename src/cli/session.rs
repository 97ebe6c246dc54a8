//! Interactive session
//!
//! Owns the address book for the lifetime of the process. Reads one command
//! at a time, dispatches it to a handler, prints the reply, and saves the
//! whole book after every mutating command and again on exit.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::handlers;
use super::parser::{parse_input, Command};
use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{ContactsPaths, Settings};
use crate::error::ContactsResult;
use crate::models::{AddressBook, Record};
use crate::storage::AddressBookRepository;

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const GOODBYE: &str = "Good bye!";
const INVALID_COMMAND: &str = "Invalid command.";

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Output(String),
    /// Print the text and stop
    Exit(String),
}

/// A running contact manager session
pub struct Session {
    book: AddressBook,
    repository: AddressBookRepository,
    audit: Option<AuditLogger>,
    settings: Settings,
    today: Option<NaiveDate>,
}

impl Session {
    /// Load the saved address book (or start empty) for the given paths
    pub fn open(paths: &ContactsPaths, settings: Settings) -> ContactsResult<Self> {
        let repository = AddressBookRepository::new(paths.address_book_file());
        let book = repository.load_or_default()?;
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            book,
            repository,
            audit,
            settings,
            today: None,
        })
    }

    /// Pin "today" instead of reading the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Run the read-execute-print loop until `exit`/`close` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> ContactsResult<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                debug!("end of input");
                writeln!(output)?;
                self.save()?;
                writeln!(output, "{}", GOODBYE)?;
                return Ok(());
            };

            match self.execute(&line)? {
                None => {}
                Some(Reply::Output(text)) => writeln!(output, "{}", text)?,
                Some(Reply::Exit(text)) => {
                    writeln!(output, "{}", text)?;
                    return Ok(());
                }
            }
        }
    }

    /// Execute one raw input line
    ///
    /// Returns `None` for a blank line. Handler failures are part of the
    /// reply text; only persistence failures surface as `Err`.
    pub fn execute(&mut self, line: &str) -> ContactsResult<Option<Reply>> {
        let Some((token, args)) = parse_input(line) else {
            return Ok(None);
        };

        let Some(command) = Command::from_name(&token) else {
            debug!(command = %token, "unknown command");
            return Ok(Some(Reply::Output(INVALID_COMMAND.to_string())));
        };
        debug!(command = command.name(), args = args.len(), "dispatching");

        let target = args.first().cloned();
        let before = target
            .as_deref()
            .and_then(|name| self.book.find(name))
            .cloned();

        let book = &mut self.book;
        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => handlers::render(handlers::add_contact(&args, book)),
            Command::Change => handlers::render(handlers::change_contact(&args, book)),
            Command::Phone => handlers::render(handlers::show_phone(&args, book)),
            Command::RemovePhone => handlers::render(handlers::remove_phone(&args, book)),
            Command::AddBirthday => handlers::render(handlers::add_birthday(&args, book)),
            Command::ShowBirthday => handlers::render(handlers::show_birthday(&args, book)),
            Command::Birthdays => {
                let today = self.today();
                handlers::birthdays(&self.book, today, self.settings.upcoming_window_days)
            }
            Command::All => handlers::show_all(book),
            Command::Delete => handlers::render(handlers::delete_contact(&args, book)),
            Command::Help => handlers::help(),
            Command::Exit => {
                self.save()?;
                return Ok(Some(Reply::Exit(GOODBYE.to_string())));
            }
        };

        if command.is_mutating() {
            if let Some(target) = target.as_deref() {
                self.audit_change(target, before.as_ref());
            }
            self.save()?;
        }

        Ok(Some(Reply::Output(text)))
    }

    /// Persist the whole address book
    pub fn save(&self) -> ContactsResult<()> {
        self.repository.save(&self.book)
    }

    fn audit_change(&self, name: &str, before: Option<&Record>) {
        let Some(audit) = &self.audit else {
            return;
        };
        let Some(entry) = AuditEntry::for_change(before, self.book.find(name)) else {
            return;
        };

        if let Err(e) = audit.log(&entry) {
            warn!(error = %e, contact = name, "failed to write audit entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::storage::load_book;
    use tempfile::TempDir;

    fn open_session(temp_dir: &TempDir) -> Session {
        let paths = ContactsPaths::with_base_dir(temp_dir.path());
        Session::open(&paths, Settings::default())
            .unwrap()
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap())
    }

    fn output(session: &mut Session, line: &str) -> String {
        match session.execute(line).unwrap() {
            Some(Reply::Output(text)) => text,
            other => panic!("unexpected reply for {line:?}: {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);

        assert_eq!(session.execute("   ").unwrap(), None);
        assert_eq!(output(&mut session, "frobnicate"), "Invalid command.");
        assert_eq!(output(&mut session, "HELLO"), "How can I help you?");
    }

    #[test]
    fn test_mutations_are_saved_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);

        assert_eq!(output(&mut session, "add Alice 1234567890"), "Contact added.");

        let saved = load_book(temp_dir.path().join("addressbook.json"))
            .unwrap()
            .unwrap();
        assert!(saved.find("Alice").is_some());
    }

    #[test]
    fn test_state_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut session = open_session(&temp_dir);
            output(&mut session, "add Alice 1234567890");
            output(&mut session, "add-birthday Alice 15.06.1990");
            assert_eq!(
                session.execute("close").unwrap(),
                Some(Reply::Exit("Good bye!".to_string()))
            );
        }

        let mut session = open_session(&temp_dir);
        assert_eq!(output(&mut session, "phone Alice"), "1234567890");
        assert_eq!(output(&mut session, "show-birthday Alice"), "15.06.1990");
        assert_eq!(output(&mut session, "birthdays"), "Alice: 17.06.2024");
    }

    #[test]
    fn test_failed_command_leaves_book_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);
        output(&mut session, "add Alice 1234567890");
        let before = session.book().clone();

        assert_eq!(
            output(&mut session, "change Alice 1234567890 bad"),
            "Error: phone must be exactly 10 digits"
        );
        assert_eq!(session.book(), &before);
    }

    #[test]
    fn test_audit_log_records_mutations() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);

        output(&mut session, "add Alice 1234567890");
        output(&mut session, "add Alice 0000000000");
        output(&mut session, "add Bob 123");
        output(&mut session, "remove-phone Alice 5555555555");
        output(&mut session, "delete Alice");

        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let operations: Vec<_> = logger
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| (e.operation, e.contact))
            .collect();
        assert_eq!(
            operations,
            [
                (Operation::Create, "Alice".to_string()),
                (Operation::Update, "Alice".to_string()),
                (Operation::Delete, "Alice".to_string()),
            ]
        );
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let mut session = Session::open(&paths, settings).unwrap();

        output(&mut session, "add Alice 1234567890");
        assert!(!paths.audit_log().exists());
    }

    #[test]
    fn test_run_transcript() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);

        let input = "hello\nadd Alice 1234567890\n\nphone Alice\nexit\nall\n";
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Contact added.\n\
             Enter a command: \
             Enter a command: 1234567890\n\
             Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn test_run_end_of_input_saves() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);

        let mut out = Vec::new();
        session.run("".as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("Good bye!\n"));
        assert!(temp_dir.path().join("addressbook.json").exists());
    }
}
