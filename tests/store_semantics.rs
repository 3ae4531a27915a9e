use phonebook::{
    contact::{Contact, ContactFilter, IndexedContact},
    core::{identity::SequentialIdentity, store::{PhonebookStore, PutOutcome}},
};

fn contact(name: &str, address: &str, phones: &[&str]) -> Contact {
    Contact {
        name: name.to_string(),
        address: address.to_string(),
        phone_number_list: phones.iter().map(|p| p.to_string()).collect(),
    }
}

fn sorted_ids(entries: Vec<&IndexedContact>) -> Vec<i64> {
    let mut ids: Vec<i64> = entries.into_iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn create_issues_increasing_ids_even_after_delete() {
    let mut store = PhonebookStore::new();
    let a = store.create(contact("A", "X", &[]));
    let b = store.create(contact("B", "X", &[]));
    store.delete(b.id);
    let c = store.create(contact("C", "X", &[]));

    assert_eq!((a.id, b.id, c.id), (0, 1, 2));
    assert_eq!(store.len(), 2);
}

#[test]
fn identical_contacts_get_distinct_ids() {
    let mut store = PhonebookStore::new();
    let first = store.create(contact("Alice", "X", &["111"]));
    let second = store.create(contact("Alice", "X", &["111"]));

    assert_ne!(first.id, second.id);
    assert_eq!(first.contact(), second.contact());
}

#[test]
fn create_then_find_by_id_round_trips_fields() {
    let mut store = PhonebookStore::new();
    let input = contact("Alice", "1 Main St", &["111", "222"]);
    let created = store.create(input.clone());

    let found = store.find_by_id(created.id).expect("stored");
    assert_eq!(found, &IndexedContact::new(created.id, input));
    assert!(store.find_by_id(created.id + 100).is_none());
}

#[test]
fn filters_use_exact_fields_and_phone_membership() {
    let mut store = PhonebookStore::new();
    let a = store.create(contact("Alice", "X", &["111"]));
    let b = store.create(contact("Alice", "Y", &["222"]));
    let _c = store.create(contact("Bob", "X", &["111", "333"]));

    assert_eq!(
        sorted_ids(store.find_filtered(&ContactFilter::by_name("Alice"))),
        vec![a.id, b.id]
    );

    let name_and_address = ContactFilter {
        name: Some("Alice".to_string()),
        address: Some("X".to_string()),
        phone: None,
    };
    assert_eq!(sorted_ids(store.find_filtered(&name_and_address)), vec![a.id]);

    assert_eq!(
        sorted_ids(store.find_filtered(&ContactFilter::by_phone("222"))),
        vec![b.id]
    );

    // No partial matching.
    assert!(store.find_filtered(&ContactFilter::by_name("Ali")).is_empty());
    assert!(store.find_filtered(&ContactFilter::by_phone("11")).is_empty());
}

#[test]
fn empty_filter_matches_find_all() {
    let mut store = PhonebookStore::new();
    for i in 0..5 {
        store.create(contact(&format!("N{i}"), "X", &[]));
    }

    assert_eq!(
        sorted_ids(store.find_filtered(&ContactFilter::default())),
        sorted_ids(store.find_all())
    );
    assert_eq!(store.find_all().len(), 5);
}

#[test]
fn empty_string_filter_is_present() {
    let mut store = PhonebookStore::new();
    let blank = store.create(contact("", "X", &[]));
    store.create(contact("Named", "X", &[]));

    assert_eq!(
        sorted_ids(store.find_filtered(&ContactFilter::by_name(""))),
        vec![blank.id]
    );
}

#[test]
fn put_replaces_existing_entry_wholesale() {
    let mut store = PhonebookStore::new();
    for i in 0..6 {
        store.create(contact(&format!("Old{i}"), "Old St", &["000"]));
    }

    let replacement = IndexedContact::new(5, contact("New", "New St", &[]));
    let (stored, outcome) = store.put_entry(replacement.clone());

    assert_eq!(outcome, PutOutcome::Replaced);
    assert_eq!(stored, replacement);
    assert_eq!(store.find_by_id(5), Some(&replacement));
    assert_eq!(store.len(), 6);
}

#[test]
fn put_inserts_absent_id_verbatim_without_touching_counter() {
    let mut store = PhonebookStore::new();
    let entry = IndexedContact::new(5, contact("New", "Y", &["9"]));

    let (_, outcome) = store.put_entry(entry.clone());
    assert_eq!(outcome, PutOutcome::Inserted);
    assert_eq!(store.find_by_id(5), Some(&entry));
    assert_eq!(store.factory().peek_next_id(), 0);
}

#[test]
fn delete_is_idempotent() {
    let mut store = PhonebookStore::new();
    let kept = store.create(contact("Keep", "X", &[]));
    let gone = store.create(contact("Gone", "X", &[]));

    store.delete(42);
    assert_eq!(store.len(), 2);

    store.delete(gone.id);
    store.delete(gone.id);
    assert_eq!(store.len(), 1);
    assert!(store.find_by_id(gone.id).is_none());
    assert!(store.find_by_id(kept.id).is_some());
}

#[test]
fn independent_stores_have_independent_counters() {
    let mut first = PhonebookStore::new();
    let mut second = PhonebookStore::with_factory(SequentialIdentity::starting_at(100));

    first.create(contact("A", "X", &[]));
    first.create(contact("B", "X", &[]));
    let from_second = second.create(contact("C", "X", &[]));
    let from_default = PhonebookStore::new().create(contact("D", "X", &[]));

    assert_eq!(from_second.id, 100);
    assert_eq!(from_default.id, 0);
    assert_eq!(first.factory().peek_next_id(), 2);
}
