//! Contact records, the indexed form kept in the store, and lookup filters.

use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// Phonebook entry as supplied by a client, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Phone numbers in client order.
    pub phone_number_list: Vec<String>,
}

/// Stored phonebook entry: a [`Contact`] plus the id it is keyed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedContact {
    /// Store key.
    pub id: ContactId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Phone numbers in client order.
    #[serde(default)]
    pub phone_number_list: Vec<String>,
}

impl IndexedContact {
    /// Attaches `id` to the fields of `contact`.
    pub fn new(id: ContactId, contact: Contact) -> Self {
        Self {
            id,
            name: contact.name,
            address: contact.address,
            phone_number_list: contact.phone_number_list,
        }
    }

    /// Copy of the entry without its id.
    pub fn contact(&self) -> Contact {
        Contact {
            name: self.name.clone(),
            address: self.address.clone(),
            phone_number_list: self.phone_number_list.clone(),
        }
    }
}

/// Request body for a replace-or-insert. The id is optional here so a missing
/// id can be reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutContactBody {
    /// Id the client claims for this entry.
    pub id: Option<ContactId>,
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Phone numbers in client order.
    pub phone_number_list: Vec<String>,
}

impl PutContactBody {
    /// Returns the indexed contact when the body id textually equals `path_id`.
    pub fn into_indexed_for(self, path_id: &str) -> Option<IndexedContact> {
        let id = self.id?;
        if id.to_string() != path_id {
            return None;
        }
        Some(IndexedContact {
            id,
            name: self.name,
            address: self.address,
            phone_number_list: self.phone_number_list,
        })
    }
}

/// AND-combined lookup filter. `None` means "not provided"; `Some("")` is an
/// exact match against the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContactFilter {
    /// Exact name match.
    pub name: Option<String>,
    /// Exact address match.
    pub address: Option<String>,
    /// Membership in the phone number list.
    pub phone: Option<String>,
}

impl ContactFilter {
    /// Filter on name only.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Filter on address only.
    pub fn by_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    /// Filter on phone number only.
    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::default()
        }
    }

    /// Returns true when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.phone.is_none()
    }

    /// Returns true when `entry` satisfies every provided field.
    pub fn matches(&self, entry: &IndexedContact) -> bool {
        self.name.as_ref().is_none_or(|n| &entry.name == n)
            && self.address.as_ref().is_none_or(|a| &entry.address == a)
            && self
                .phone
                .as_ref()
                .is_none_or(|p| entry.phone_number_list.contains(p))
    }
}
