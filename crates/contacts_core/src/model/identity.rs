//! Identifier generation for new contacts.

use crate::model::contact::ContactId;
use uuid::Uuid;

/// Source of fresh, unique contact identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> ContactId;
}

/// Random UUID v4 identifiers, uppercase hyphenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> ContactId {
        Uuid::new_v4().hyphenated().to_string().to_ascii_uppercase()
    }
}
