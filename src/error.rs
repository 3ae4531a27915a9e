//! Error taxonomy surfaced to phonebook clients.

use crate::types::ContactId;

/// Errors a phonebook request can fail with.
///
/// | Variant | Raised by |
/// |---------|-----------|
/// | `NotFound` | single-contact lookup with an unknown id |
/// | `InvalidRequest` | replace-or-insert whose body id is missing or differs from the path |
/// | `Conflict` | reserved for id collisions; no store operation raises it today |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhonebookError {
    /// No contact is stored under the id.
    #[error("Contact with id '{id}' not found.")]
    NotFound {
        /// Requested id, as the client sent it.
        id: String,
    },

    /// The request is structurally inconsistent.
    #[error("{reason}")]
    InvalidRequest {
        /// Human-readable explanation.
        reason: String,
    },

    /// A contact already exists under the id.
    #[error("Contact with id '{id}' already exists.")]
    Conflict {
        /// Colliding id.
        id: ContactId,
    },
}

impl PhonebookError {
    /// Not-found error for a numeric id.
    pub fn not_found(id: ContactId) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Id mismatch between a request path and its body.
    pub fn id_mismatch() -> Self {
        Self::InvalidRequest {
            reason: "The contact's id should be the same with the URI's id.".to_string(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidRequest { .. } => "invalid_request",
            Self::Conflict { .. } => "conflict",
        }
    }
}
