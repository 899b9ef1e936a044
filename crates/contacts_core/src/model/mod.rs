//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by store and view-models.
//! - Keep identity generation injectable so callers control fresh ids.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Deletion removes the record; there are no tombstones.

pub mod contact;
pub mod identity;
