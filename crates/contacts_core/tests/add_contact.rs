use contacts_core::db::open_db_in_memory;
use contacts_core::{
    AddContactForm, ContactField, ContactFormError, ContactId, ContactListViewModel, IdGenerator,
};

struct SequentialIds {
    next: u32,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ContactId {
        self.next += 1;
        format!("id-{}", self.next)
    }
}

fn filled_form() -> AddContactForm<SequentialIds> {
    let mut form = AddContactForm::with_id_generator(SequentialIds { next: 0 });
    form.first_name = "Ana".to_string();
    form.last_name = "Lopez".to_string();
    form.phone = "555-1111".to_string();
    form
}

#[test]
fn empty_form_cannot_save() {
    let form = AddContactForm::new();
    assert!(!form.can_save());
    assert_eq!(
        form.validate(),
        Err(ContactFormError::MissingField(ContactField::FirstName))
    );
}

#[test]
fn whitespace_phone_is_rejected() {
    let mut form = filled_form();
    form.phone = " \t ".to_string();
    assert_eq!(
        form.validate(),
        Err(ContactFormError::MissingField(ContactField::Phone))
    );
    assert_eq!(
        form.build_contact().unwrap_err(),
        ContactFormError::MissingField(ContactField::Phone)
    );
}

#[test]
fn build_contact_assigns_fresh_identifier_each_time() {
    let mut form = filled_form();

    let first = form.build_contact().unwrap();
    let second = form.build_contact().unwrap();

    assert_eq!(first.identifier(), "id-1");
    assert_eq!(second.identifier(), "id-2");
    assert_eq!(first.full_name(), "Ana Lopez");
    assert_eq!(first.phone, "555-1111");
    assert_eq!(first.image_url, None);
}

#[test]
fn random_image_is_carried_into_built_contact() {
    let mut form = filled_form();

    let url = form.load_random_image().to_string();
    assert_eq!(url, "https://picsum.photos/seed/id-1/400");

    let contact = form.build_contact().unwrap();
    assert_eq!(contact.identifier(), "id-2");
    assert_eq!(contact.image_url.as_deref(), Some(url.as_str()));
}

#[test]
fn reloading_image_replaces_previous_url() {
    let mut form = filled_form();
    form.load_random_image();
    form.load_random_image();
    assert_eq!(
        form.image_url.as_deref(),
        Some("https://picsum.photos/seed/id-2/400")
    );
}

#[test]
fn cancel_clears_input_and_produces_nothing() {
    let mut form = filled_form();
    form.load_random_image();

    form.cancel();

    assert!(form.first_name.is_empty());
    assert!(form.image_url.is_none());
    assert!(form.build_contact().is_err());
}

#[test]
fn confirmed_form_feeds_list_view_model() {
    let conn = open_db_in_memory().unwrap();
    let mut list = ContactListViewModel::with_default_store(&conn);
    list.load();

    let mut form = filled_form();
    let contact = form.build_contact().unwrap();
    assert!(list.add(&contact));

    assert_eq!(list.number_of_items(), 1);
    assert_eq!(list.item(0), Some(&contact));
}
