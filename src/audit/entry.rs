//! Audit entry data structures
//!
//! Defines the structure of audit log entries: what happened to which
//! contact, with before/after snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::describe_changes;
use crate::models::Record;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was created
    Create,
    /// Contact was updated
    Update,
    /// Contact was deleted
    Delete,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Name of the affected contact
    pub contact: String,

    /// The contact before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The contact after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    pub fn create(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            contact: record.name().to_string(),
            before: None,
            after: serde_json::to_value(record).ok(),
            diff_summary: None,
        }
    }

    pub fn update(before: &Record, after: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            contact: after.name().to_string(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary: describe_changes(before, after),
        }
    }

    pub fn delete(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            contact: record.name().to_string(),
            before: serde_json::to_value(record).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Build the entry describing a change to one contact, if anything changed
    pub fn for_change(before: Option<&Record>, after: Option<&Record>) -> Option<Self> {
        match (before, after) {
            (None, Some(after)) => Some(Self::create(after)),
            (Some(before), None) => Some(Self::delete(before)),
            (Some(before), Some(after)) if before != after => Some(Self::update(before, after)),
            _ => None,
        }
    }
}
