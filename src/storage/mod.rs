//! Storage layer for the contact manager
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod address_book;
pub mod file_io;

pub use address_book::{load_book, save_book, AddressBookRepository};
pub use file_io::{read_json_optional, write_json_atomic};
