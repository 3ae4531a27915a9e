//! Runtime event stream payloads.

use crate::types::ContactId;

/// Events emitted from the single-writer runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    /// A contact was created with a freshly issued id.
    Created {
        /// Issued id.
        id: ContactId,
    },
    /// A put stored a contact under a previously unused id.
    Inserted {
        /// Client-supplied id.
        id: ContactId,
    },
    /// A put overwrote an existing contact.
    Replaced {
        /// Overwritten id.
        id: ContactId,
    },
    /// A contact was removed. Deletes of absent ids emit nothing.
    Deleted {
        /// Removed id.
        id: ContactId,
    },
}
