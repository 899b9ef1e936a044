//! Contact record.
//!
//! # Responsibility
//! - Define the persisted contact shape and its serialized field names.
//! - Provide the derived `full_name` projection used by search and display.
//!
//! # Invariants
//! - `identifier` is assigned once at construction and never changes.
//! - Updates replace the whole record; there is no partial field merge.

use crate::model::identity::IdGenerator;
use serde::{Deserialize, Serialize};

/// Opaque unique identifier of one contact.
pub type ContactId = String;

/// One person in the address book.
///
/// Name and phone fields are free-form here; non-empty rules live in the
/// add form, not in the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Serialized as `id`.
    #[serde(rename = "id")]
    identifier: ContactId,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub phone: String,
    /// Photo URL, omitted from the stored record when absent.
    #[serde(rename = "image", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Contact {
    /// Creates a contact with a fresh identifier from `ids`.
    pub fn new(
        ids: &mut impl IdGenerator,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::with_id(ids.next_id(), first_name, last_name, phone)
    }

    /// Creates a contact with a caller-provided identifier.
    ///
    /// Used by import paths and by `save` callers that replace an existing
    /// record under the same identity.
    pub fn with_id(
        identifier: impl Into<ContactId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            image_url: None,
        }
    }

    /// Returns this contact with `image_url` set.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// `"<first_name> <last_name>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns whether `other` refers to the same stored record.
    pub fn same_identity(&self, other: &Contact) -> bool {
        self.identifier == other.identifier
    }
}
