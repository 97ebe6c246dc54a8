//! Audit logging for contact changes
//!
//! Every successful contact mutation is appended to `audit.log` as one JSON
//! line holding the operation, the contact name and before/after snapshots.
//!
//! - `AuditEntry`: a single entry with timestamp, operation and snapshots.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `describe_changes`: human-readable summary of an update.

mod diff;
mod entry;
mod logger;

pub use diff::describe_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
