//! Custom error types for the contact manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::FieldValidationError;

/// The main error type for contact manager operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed field values (phone numbers, birthdays)
    #[error("{0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Too few or too many arguments for a command
    #[error("wrong number of arguments, usage: {usage}")]
    ArgumentCount { usage: &'static str },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactsError {
    /// Create a "not found" error for a phone that should exist on a record
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "old phone",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<FieldValidationError> for ContactsError {
    fn from(err: FieldValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for contact manager operations
pub type ContactsResult<T> = Result<T, ContactsError>;
