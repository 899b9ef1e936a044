//! Contact list view-model.
//!
//! # Responsibility
//! - Mirror the stored collection and expose a query-filtered view of it.
//! - Route add/delete requests to the store, then refresh both lists.
//!
//! # Invariants
//! - `filtered_contacts` is always `all_contacts` filtered by `query`.
//! - Index-based access is bounds checked and never panics.
//! - Store failures are logged and absorbed; nothing propagates to callers.

use crate::model::contact::Contact;
use crate::repo::contact_store::{ContactStore, SqliteContactStore};
use crate::search::filter::filter_contacts;
use log::{debug, warn};
use rusqlite::Connection;

/// List/search state for the contacts screen.
pub struct ContactListViewModel<S: ContactStore> {
    store: S,
    all_contacts: Vec<Contact>,
    filtered_contacts: Vec<Contact>,
    query: String,
}

impl<'conn> ContactListViewModel<SqliteContactStore<'conn>> {
    /// Creates a view-model over the default key-value contact slot.
    pub fn with_default_store(conn: &'conn Connection) -> Self {
        Self::new(SqliteContactStore::new(conn))
    }
}

impl<S: ContactStore> ContactListViewModel<S> {
    /// Creates an empty view-model. Call [`Self::load`] to populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            all_contacts: Vec::new(),
            filtered_contacts: Vec::new(),
            query: String::new(),
        }
    }

    /// Re-reads the stored collection and re-applies the current query.
    pub fn load(&mut self) {
        self.all_contacts = self.store.fetch();
        self.apply_filter();
        debug!(
            "event=contacts_load module=view_model status=ok total={} visible={}",
            self.all_contacts.len(),
            self.filtered_contacts.len()
        );
    }

    /// Number of contacts visible under the current query.
    pub fn number_of_items(&self) -> usize {
        self.filtered_contacts.len()
    }

    /// Visible contact at `index`, or `None` when out of range.
    pub fn item(&self, index: isize) -> Option<&Contact> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.filtered_contacts.get(index))
    }

    /// Saves `contact` (insert or replace by identifier) and reloads.
    ///
    /// Returns whether the store reported a successful write. The lists are
    /// refreshed either way.
    pub fn add(&mut self, contact: &Contact) -> bool {
        let persisted = match self.store.save(contact) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=contact_add module=view_model status=error error={}",
                    err
                );
                false
            }
        };
        self.load();
        persisted
    }

    /// Deletes the visible contact at `index` and reloads.
    ///
    /// Out-of-range indexes are a no-op and leave the store untouched.
    /// Returns whether a contact was resolved and the write succeeded.
    pub fn delete_at(&mut self, index: isize) -> bool {
        let Some(contact) = self.item(index).cloned() else {
            return false;
        };

        let persisted = match self.store.delete(&contact) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=contact_delete module=view_model status=error error={}",
                    err
                );
                false
            }
        };
        self.load();
        persisted
    }

    /// Replaces the query and re-filters immediately.
    pub fn update_query(&mut self, new_query: impl Into<String>) {
        self.query = new_query.into();
        self.apply_filter();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Full stored collection as of the last [`Self::load`].
    pub fn all_contacts(&self) -> &[Contact] {
        &self.all_contacts
    }

    /// Contacts visible under the current query, in stored order.
    pub fn filtered_contacts(&self) -> &[Contact] {
        &self.filtered_contacts
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply_filter(&mut self) {
        self.filtered_contacts = filter_contacts(&self.all_contacts, &self.query);
    }
}
