//! In-memory phonebook store and id issuance.

/// Id issuance and initial store construction.
pub mod identity;
/// Phonebook store with filtered lookups and upsert.
pub mod store;
