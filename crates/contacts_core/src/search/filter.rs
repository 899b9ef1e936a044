//! Case-insensitive substring filter over name and phone.
//!
//! # Invariants
//! - Blank queries match every contact and keep original order.
//! - Matching is substring based over `"<full_name> <phone>"`, so a query
//!   may span the name/phone boundary.

use crate::model::contact::Contact;

/// Trims surrounding whitespace (including newlines) and lowercases.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns whether `contact` matches an already normalized query.
pub fn matches_query(contact: &Contact, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    let haystack = format!("{} {}", contact.full_name(), contact.phone).to_lowercase();
    haystack.contains(normalized_query)
}

/// Filters `contacts` by a raw user query, preserving input order.
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return contacts.to_vec();
    }
    contacts
        .iter()
        .filter(|contact| matches_query(contact, &normalized))
        .cloned()
        .collect()
}
