//! Phonebook store: keyed contacts with filtered lookups and upsert.

use crate::{
    contact::{Contact, ContactFilter, IndexedContact},
    types::ContactId,
};

use super::identity::{ContactMap, IdentityFactory, SequentialIdentity};

/// Result of a replace-or-insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// No entry existed under the id.
    Inserted,
    /// An existing entry was overwritten wholesale.
    Replaced,
}

/// In-memory phonebook keyed by contact id.
///
/// Not synchronized; callers that share a store across tasks go through
/// [`crate::runtime::handle::PhonebookHandle`].
#[derive(Debug)]
pub struct PhonebookStore<F: IdentityFactory = SequentialIdentity> {
    records: ContactMap,
    factory: F,
}

impl PhonebookStore<SequentialIdentity> {
    /// Empty store issuing ids from 0.
    pub fn new() -> Self {
        Self::with_factory(SequentialIdentity::new())
    }
}

impl Default for PhonebookStore<SequentialIdentity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: IdentityFactory> PhonebookStore<F> {
    /// Empty store built and indexed by `factory`.
    pub fn with_factory(factory: F) -> Self {
        Self {
            records: factory.new_store(),
            factory,
        }
    }

    /// Factory issuing ids for this store.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every stored entry, in no particular order.
    pub fn find_all(&self) -> Vec<&IndexedContact> {
        self.records.values().collect()
    }

    /// Owned copy of [`Self::find_all`].
    pub fn find_all_cloned(&self) -> Vec<IndexedContact> {
        self.records.values().cloned().collect()
    }

    /// Entry stored under `id`, if any. Absence is not an error.
    pub fn find_by_id(&self, id: ContactId) -> Option<&IndexedContact> {
        self.records.get(&id)
    }

    /// Owned copy of [`Self::find_by_id`].
    pub fn find_by_id_cloned(&self, id: ContactId) -> Option<IndexedContact> {
        self.find_by_id(id).cloned()
    }

    /// Entries satisfying every provided field of `filter`; all entries when
    /// the filter is empty.
    pub fn find_filtered(&self, filter: &ContactFilter) -> Vec<&IndexedContact> {
        if filter.is_empty() {
            return self.find_all();
        }
        self.records.values().filter(|c| filter.matches(c)).collect()
    }

    /// Owned copy of [`Self::find_filtered`].
    pub fn find_filtered_cloned(&self, filter: &ContactFilter) -> Vec<IndexedContact> {
        self.find_filtered(filter).into_iter().cloned().collect()
    }

    /// Indexes `contact` with a fresh id and stores it. Duplicate field
    /// values are allowed and get distinct ids.
    pub fn create(&mut self, contact: Contact) -> IndexedContact {
        let indexed = self.factory.index(contact);
        self.records.insert(indexed.id, indexed.clone());
        indexed
    }

    /// Stores `contact` under its own id, replacing any existing entry.
    ///
    /// The id is not checked against the factory counter, so a later
    /// `create` can reuse an id that arrived through here.
    pub fn put(&mut self, contact: IndexedContact) -> IndexedContact {
        self.put_entry(contact).0
    }

    /// Like [`Self::put`], also reporting whether an entry was replaced.
    pub fn put_entry(&mut self, contact: IndexedContact) -> (IndexedContact, PutOutcome) {
        let outcome = match self.records.insert(contact.id, contact.clone()) {
            Some(_) => PutOutcome::Replaced,
            None => PutOutcome::Inserted,
        };
        (contact, outcome)
    }

    /// Removes the entry under `id`; absent ids are a no-op.
    pub fn delete(&mut self, id: ContactId) {
        let _ = self.remove(id);
    }

    /// Removes and returns the entry under `id`, if any.
    pub fn remove(&mut self, id: ContactId) -> Option<IndexedContact> {
        self.records.remove(&id)
    }
}
