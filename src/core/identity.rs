//! Id issuance and construction of the initial backing map.

use hashbrown::HashMap;

use crate::{
    contact::{Contact, IndexedContact},
    types::ContactId,
};

/// Backing map of a phonebook store.
pub type ContactMap = HashMap<ContactId, IndexedContact>;

/// Produces the initial backing map and attaches fresh ids to new contacts.
///
/// Each store owns its factory, so two stores never share a counter.
pub trait IdentityFactory: Send + 'static {
    /// Initial (empty) backing map.
    fn new_store(&self) -> ContactMap;

    /// Attaches a never-before-issued id to `contact`.
    fn index(&mut self, contact: Contact) -> IndexedContact;
}

/// Highest starting point accepted by [`SequentialIdentity::starting_at`].
///
/// Leaves 2^62 ids of headroom, so the counter cannot reach `ContactId::MAX`.
pub const MAX_FIRST_ID: ContactId = ContactId::MAX / 2;

/// Counter-based factory issuing 0, 1, 2, ...
#[derive(Debug, Default)]
pub struct SequentialIdentity {
    next_id: ContactId,
}

impl SequentialIdentity {
    /// Factory whose first issued id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts issuing at `first` instead of 0. Values above [`MAX_FIRST_ID`]
    /// are clamped to it.
    pub fn starting_at(first: ContactId) -> Self {
        Self {
            next_id: first.min(MAX_FIRST_ID),
        }
    }

    /// Returns the next unused id and advances the counter.
    pub fn issue_id(&mut self) -> ContactId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next call to [`Self::issue_id`] will return.
    pub fn peek_next_id(&self) -> ContactId {
        self.next_id
    }
}

impl IdentityFactory for SequentialIdentity {
    fn new_store(&self) -> ContactMap {
        ContactMap::new()
    }

    fn index(&mut self, contact: Contact) -> IndexedContact {
        IndexedContact::new(self.issue_id(), contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_from_zero_and_never_repeats() {
        let mut factory = SequentialIdentity::new();
        assert_eq!(factory.peek_next_id(), 0);
        assert_eq!(factory.issue_id(), 0);
        assert_eq!(factory.issue_id(), 1);
        assert_eq!(factory.peek_next_id(), 2);

        let indexed = factory.index(Contact::default());
        assert_eq!(indexed.id, 2);
    }

    #[test]
    fn starting_point_is_clamped_below_overflow() {
        let mut factory = SequentialIdentity::starting_at(ContactId::MAX);
        assert_eq!(factory.issue_id(), MAX_FIRST_ID);
        assert_eq!(factory.issue_id(), MAX_FIRST_ID + 1);

        let mut low = SequentialIdentity::starting_at(-3);
        assert_eq!(low.issue_id(), -3);
    }

    #[test]
    fn new_store_is_empty() {
        assert!(SequentialIdentity::starting_at(40).new_store().is_empty());
    }
}
