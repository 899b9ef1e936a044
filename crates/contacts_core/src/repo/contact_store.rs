//! Contact store contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Provide fetch/save/delete over one persisted contact collection.
//! - Keep the serialized record layout inside the persistence boundary.
//!
//! # Invariants
//! - The collection is unique by identifier and keeps insertion order.
//! - `save` replaces a matching record in place, otherwise appends.
//! - Every write re-serializes and overwrites the entire collection.
//! - A write never proceeds when the current collection could not be read.

use crate::db::kv::{read_slot, write_slot};
use crate::db::DbError;
use crate::model::contact::Contact;
use log::{debug, error, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name used when no explicit key is configured.
pub const DEFAULT_STORE_KEY: &str = "contacts_store";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting the contact collection.
#[derive(Debug)]
pub enum StoreError {
    /// Collection could not be serialized.
    Encode(serde_json::Error),
    /// Key-value slot could not be written.
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode contacts: {err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Persistence interface for the contact collection.
pub trait ContactStore {
    /// Returns the full collection in stored order.
    ///
    /// Missing or undecodable state yields an empty list.
    fn fetch(&self) -> Vec<Contact>;
    /// Inserts or replaces one contact by identifier.
    fn save(&self, contact: &Contact) -> StoreResult<()>;
    /// Removes every record sharing the contact's identifier.
    fn delete(&self, contact: &Contact) -> StoreResult<()>;
}

/// Contact store backed by one slot of the SQLite key-value table.
pub struct SqliteContactStore<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteContactStore<'conn> {
    /// Creates a store over [`DEFAULT_STORE_KEY`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, DEFAULT_STORE_KEY)
    }

    /// Creates a store over a caller-chosen slot.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the collection a write will be based on.
    ///
    /// Undecodable blobs count as empty so the next write replaces them.
    /// Slot read failures are returned; writing over an unread slot would
    /// drop every stored record.
    fn load_for_write(&self) -> StoreResult<Vec<Contact>> {
        let Some(blob) = read_slot(self.conn, &self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice::<Vec<Contact>>(&blob) {
            Ok(contacts) => Ok(contacts),
            Err(err) => {
                warn!(
                    "event=contacts_decode module=store status=error key={} error_code=decode_failed error={}",
                    self.key, err
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, contacts: &[Contact]) -> StoreResult<()> {
        let result = serde_json::to_vec(contacts)
            .map_err(StoreError::from)
            .and_then(|blob| write_slot(self.conn, &self.key, &blob).map_err(StoreError::from));

        match &result {
            Ok(()) => debug!(
                "event=contacts_persist module=store status=ok key={} count={}",
                self.key,
                contacts.len()
            ),
            Err(err) => error!(
                "event=contacts_persist module=store status=error key={} count={} error={}",
                self.key,
                contacts.len(),
                err
            ),
        }
        result
    }
}

impl ContactStore for SqliteContactStore<'_> {
    fn fetch(&self) -> Vec<Contact> {
        match self.load_for_write() {
            Ok(contacts) => contacts,
            Err(err) => {
                warn!(
                    "event=contacts_fetch module=store status=error key={} error_code=slot_read_failed error={}",
                    self.key, err
                );
                Vec::new()
            }
        }
    }

    fn save(&self, contact: &Contact) -> StoreResult<()> {
        let mut contacts = self.load_for_write().inspect_err(|err| {
            error!(
                "event=contacts_save module=store status=error key={} error_code=slot_read_failed error={}",
                self.key, err
            );
        })?;
        match contacts
            .iter()
            .position(|stored| stored.same_identity(contact))
        {
            Some(index) => contacts[index] = contact.clone(),
            None => contacts.push(contact.clone()),
        }
        self.persist(&contacts)
    }

    fn delete(&self, contact: &Contact) -> StoreResult<()> {
        let mut contacts = self.load_for_write().inspect_err(|err| {
            error!(
                "event=contacts_delete module=store status=error key={} error_code=slot_read_failed error={}",
                self.key, err
            );
        })?;
        contacts.retain(|stored| !stored.same_identity(contact));
        self.persist(&contacts)
    }
}
