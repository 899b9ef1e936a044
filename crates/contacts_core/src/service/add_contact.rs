//! Add-contact form state.
//!
//! # Responsibility
//! - Hold transient field input for a new contact.
//! - Validate required fields and assign a random placeholder photo URL.
//!
//! # Invariants
//! - A contact is only produced when first name, last name and phone are
//!   non-empty after trimming.
//! - Every produced contact carries a freshly generated identifier.

use crate::model::contact::Contact;
use crate::model::identity::{IdGenerator, UuidIdGenerator};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Public placeholder image service; no API key required.
const RANDOM_IMAGE_BASE_URL: &str = "https://picsum.photos/seed";
const RANDOM_IMAGE_SIZE: u32 = 400;

/// Required text field on the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
        }
    }
}

/// Validation failure for add-form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    /// Field is empty or whitespace only.
    MissingField(ContactField),
}

impl Display for ContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} must not be empty", field.as_str()),
        }
    }
}

impl Error for ContactFormError {}

/// Form backing the add-contact screen.
pub struct AddContactForm<G: IdGenerator = UuidIdGenerator> {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub image_url: Option<String>,
    ids: G,
}

impl AddContactForm {
    /// Creates an empty form using random UUID identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }
}

impl Default for AddContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> AddContactForm<G> {
    /// Creates an empty form drawing identifiers and image seeds from `ids`.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            image_url: None,
            ids,
        }
    }

    /// Assigns a fresh random placeholder photo URL and returns it.
    ///
    /// The URL is never fetched here; display layers load it.
    pub fn load_random_image(&mut self) -> &str {
        let seed = self.ids.next_id();
        self.image_url
            .insert(format!("{RANDOM_IMAGE_BASE_URL}/{seed}/{RANDOM_IMAGE_SIZE}"))
    }

    /// Checks required fields in display order.
    ///
    /// # Errors
    /// - Returns the first field that is empty after trimming.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        let required = [
            (ContactField::FirstName, &self.first_name),
            (ContactField::LastName, &self.last_name),
            (ContactField::Phone, &self.phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContactFormError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Whether confirming the form would produce a contact.
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds a new contact from current input.
    ///
    /// Field values are kept as entered.
    ///
    /// # Errors
    /// - Returns the first missing required field, as [`Self::validate`] does.
    pub fn build_contact(&mut self) -> Result<Contact, ContactFormError> {
        self.validate()?;
        let mut contact = Contact::new(
            &mut self.ids,
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.phone.as_str(),
        );
        contact.image_url = self.image_url.clone();
        Ok(contact)
    }

    /// Discards current input. Cancellation never produces a contact.
    pub fn cancel(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.phone.clear();
        self.image_url = None;
    }
}
