//! Contacts - interactive command-line contact manager
//!
//! Stores names, phone numbers and birthdays, and reports whom to
//! congratulate in the coming week (greetings falling on a weekend move to
//! the following Monday).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: Validated fields, contact records and the address book
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging of contact changes
//! - `display`: Terminal output formatting
//! - `cli`: Command parsing, handlers and the interactive session
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::cli::Session;
//! use contacts::config::{ContactsPaths, Settings};
//!
//! let paths = ContactsPaths::new();
//! let settings = Settings::load_or_default(&paths)?;
//! let mut session = Session::open(&paths, settings)?;
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{ContactsError, ContactsResult};
