//! Contract error types for the roster service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! problem details.

use thiserror::Error;

/// Roster service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Student or group not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (Student, Group)
        resource: &'static str,
        /// Resource identifier
        id: i32,
    },

    /// Uniqueness or referential constraint rejected the write
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Input failed domain validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Storage failure; details are logged, not returned
    #[error("Internal error")]
    Internal,
}

impl RosterError {
    pub fn student_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Student",
            id,
        }
    }

    pub fn group_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Group",
            id,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
