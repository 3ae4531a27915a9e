//! In-memory phonebook with a REST surface.
//!
//! # Examples
//!
//! Direct usage with [`core::store::PhonebookStore`]:
//! ```
//! use phonebook::{
//!     contact::{Contact, ContactFilter},
//!     core::store::PhonebookStore,
//! };
//!
//! let mut store = PhonebookStore::new();
//! let alice = store.create(Contact {
//!     name: "Alice".to_string(),
//!     address: "1 Main St".to_string(),
//!     phone_number_list: vec!["555-0100".to_string()],
//! });
//! assert_eq!(alice.id, 0);
//! assert_eq!(store.find_filtered(&ContactFilter::by_phone("555-0100")).len(), 1);
//! ```
//!
//! Shared usage through the single-writer runtime:
//! ```no_run
//! use phonebook::{
//!     contact::Contact,
//!     core::store::PhonebookStore,
//!     runtime::handle::{spawn_phonebook, RuntimeConfig},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_phonebook(PhonebookStore::new(), RuntimeConfig::default());
//! let created = handle.create(Contact::default()).await.expect("create");
//! assert!(handle.find_by_id(created.id).await.expect("get").is_some());
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Server configuration defaults.
pub mod config;
/// Contact records and lookup filters.
pub mod contact;
/// Store and id issuance.
pub mod core;
/// Client-facing error taxonomy.
pub mod error;
/// Axum router and handlers.
pub mod http;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Shared primitive types.
pub mod types;
