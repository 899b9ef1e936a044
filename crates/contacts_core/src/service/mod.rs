//! View-models mediating between presentation and storage.
//!
//! # Responsibility
//! - Hold list/search state and forward mutations to the contact store.
//! - Validate add-form input before it becomes a `Contact`.
//!
//! # Invariants
//! - View-models never read storage implicitly; callers drive `load()`.

pub mod add_contact;
pub mod contact_list;
