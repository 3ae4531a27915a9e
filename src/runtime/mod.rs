//! Task that owns the phonebook store and serializes every access to it.

/// Change notifications broadcast to subscribers.
pub mod events;
/// Cloneable handle and the command loop behind it.
pub mod handle;
