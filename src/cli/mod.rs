//! Interactive command interface
//!
//! This module contains the command parser, the per-command handlers and
//! the session that drives the read-execute-print loop.

pub mod handlers;
pub mod parser;
pub mod session;

pub use parser::{parse_input, Command};
pub use session::{Reply, Session};
