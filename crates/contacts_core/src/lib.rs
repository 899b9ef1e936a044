//! Core domain logic for the contacts feature.
//! This crate owns the contact record, its local persistence and the
//! list/form view-models that presentation layers drive.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId};
pub use model::identity::{IdGenerator, UuidIdGenerator};
pub use repo::contact_store::{
    ContactStore, SqliteContactStore, StoreError, StoreResult, DEFAULT_STORE_KEY,
};
pub use search::filter::{filter_contacts, matches_query, normalize_query};
pub use service::add_contact::{AddContactForm, ContactField, ContactFormError};
pub use service::contact_list::ContactListViewModel;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
