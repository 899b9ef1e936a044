//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the contact persistence contract used by view-models.
//! - Isolate key-value slot and serialization details from callers.
//!
//! # Invariants
//! - Reads never fail loudly: undecodable state reads as an empty collection.
//! - Writes replace the whole persisted collection.

pub mod contact_store;
