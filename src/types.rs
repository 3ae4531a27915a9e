//! Shared primitive IDs.

/// Contact identifier. Issued ids start at 0; clients may supply any value through `put`.
pub type ContactId = i64;
