use contacts_core::db::open_db_in_memory;
use contacts_core::{
    Contact, ContactListViewModel, ContactStore, SqliteContactStore, StoreResult,
};
use std::cell::RefCell;

fn ana() -> Contact {
    Contact::with_id("ana", "Ana", "Lopez", "555-1111")
}

fn bob() -> Contact {
    Contact::with_id("bob", "Bob", "Smith", "555-2222")
}

fn visible_ids<S: ContactStore>(view_model: &ContactListViewModel<S>) -> Vec<String> {
    view_model
        .filtered_contacts()
        .iter()
        .map(|contact| contact.identifier().to_string())
        .collect()
}

/// In-memory store that can be told to fail writes.
#[derive(Default)]
struct FlakyStore {
    contacts: RefCell<Vec<Contact>>,
    fail_writes: bool,
}

impl ContactStore for FlakyStore {
    fn fetch(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }

    fn save(&self, contact: &Contact) -> StoreResult<()> {
        if self.fail_writes {
            let err = serde_json::from_str::<Vec<Contact>>("{").unwrap_err();
            return Err(err.into());
        }
        let mut contacts = self.contacts.borrow_mut();
        match contacts.iter().position(|c| c.same_identity(contact)) {
            Some(index) => contacts[index] = contact.clone(),
            None => contacts.push(contact.clone()),
        }
        Ok(())
    }

    fn delete(&self, contact: &Contact) -> StoreResult<()> {
        self.contacts
            .borrow_mut()
            .retain(|c| !c.same_identity(contact));
        Ok(())
    }
}

#[test]
fn load_mirrors_store_contents() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);
    store.save(&ana()).unwrap();
    store.save(&bob()).unwrap();

    let mut view_model = ContactListViewModel::with_default_store(&conn);
    assert_eq!(view_model.number_of_items(), 0);

    view_model.load();
    assert_eq!(view_model.all_contacts(), &[ana(), bob()]);
    assert_eq!(view_model.number_of_items(), 2);
}

#[test]
fn query_filters_by_name_and_phone() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.add(&ana());
    view_model.add(&bob());

    view_model.update_query("smith");
    assert_eq!(visible_ids(&view_model), vec!["bob"]);

    view_model.update_query("555");
    assert_eq!(visible_ids(&view_model), vec!["ana", "bob"]);

    view_model.update_query("");
    assert_eq!(visible_ids(&view_model), vec!["ana", "bob"]);

    view_model.update_query("zzz");
    assert!(visible_ids(&view_model).is_empty());
    assert_eq!(view_model.number_of_items(), 0);
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.add(&ana());
    view_model.add(&bob());

    view_model.update_query("  BOB SM \n");
    assert_eq!(view_model.query(), "  BOB SM \n");
    assert_eq!(visible_ids(&view_model), vec!["bob"]);
}

#[test]
fn repeating_the_same_query_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.add(&ana());
    view_model.add(&bob());

    view_model.update_query("lopez");
    let once = view_model.filtered_contacts().to_vec();
    view_model.update_query("lopez");
    assert_eq!(view_model.filtered_contacts(), once.as_slice());
}

#[test]
fn item_is_bounds_checked() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.add(&ana());
    view_model.add(&bob());

    assert_eq!(view_model.item(0), Some(&ana()));
    assert_eq!(view_model.item(1), Some(&bob()));
    assert_eq!(view_model.item(-1), None);
    assert_eq!(view_model.item(2), None);

    view_model.update_query("bob");
    assert_eq!(view_model.item(0), Some(&bob()));
    assert_eq!(view_model.item(1), None);
}

#[test]
fn add_grows_list_by_one_and_replaces_on_identifier_collision() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);

    assert!(view_model.add(&ana()));
    assert_eq!(view_model.number_of_items(), 1);
    assert!(view_model.add(&bob()));
    assert_eq!(view_model.number_of_items(), 2);

    let renamed = Contact::with_id("ana", "Anabel", "Lopez", "555-1111");
    assert!(view_model.add(&renamed));
    assert_eq!(view_model.number_of_items(), 2);
    assert_eq!(view_model.item(0), Some(&renamed));
}

#[test]
fn add_keeps_current_query_applied() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.update_query("smith");

    view_model.add(&ana());
    assert_eq!(view_model.number_of_items(), 0);
    view_model.add(&bob());
    assert_eq!(visible_ids(&view_model), vec!["bob"]);
    assert_eq!(view_model.all_contacts().len(), 2);
}

#[test]
fn delete_at_removes_visible_item_from_store() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.add(&ana());
    view_model.add(&bob());
    view_model.update_query("smith");

    assert!(view_model.delete_at(0));

    assert_eq!(view_model.number_of_items(), 0);
    let stored = SqliteContactStore::new(&conn).fetch();
    assert_eq!(stored, vec![ana()]);
}

#[test]
fn delete_at_out_of_range_leaves_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.add(&ana());
    view_model.add(&bob());

    assert!(!view_model.delete_at(-1));
    assert!(!view_model.delete_at(2));

    view_model.update_query("zzz");
    assert!(!view_model.delete_at(0));

    assert_eq!(SqliteContactStore::new(&conn).fetch(), vec![ana(), bob()]);
    assert_eq!(view_model.all_contacts().len(), 2);
}

#[test]
fn view_model_does_not_see_external_writes_until_load() {
    let conn = open_db_in_memory().unwrap();
    let mut view_model = ContactListViewModel::with_default_store(&conn);
    view_model.load();

    SqliteContactStore::new(&conn).save(&ana()).unwrap();
    assert_eq!(view_model.number_of_items(), 0);

    view_model.load();
    assert_eq!(view_model.number_of_items(), 1);
}

#[test]
fn failed_write_is_absorbed_and_reported() {
    let store = FlakyStore {
        fail_writes: true,
        ..FlakyStore::default()
    };
    let mut view_model = ContactListViewModel::new(store);

    assert!(!view_model.add(&ana()));
    assert_eq!(view_model.number_of_items(), 0);
    assert!(view_model.store().fetch().is_empty());
}

#[test]
fn view_model_works_with_any_store_implementation() {
    let mut view_model = ContactListViewModel::new(FlakyStore::default());
    view_model.add(&ana());
    view_model.add(&bob());
    view_model.update_query("lopez");

    assert!(view_model.delete_at(0));
    view_model.update_query("");
    assert_eq!(visible_ids(&view_model), vec!["bob"]);
}
