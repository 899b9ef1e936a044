//! Contact search entry points.
//!
//! # Responsibility
//! - Derive the visible contact list from a free-text query.
//! - Keep query normalization rules in one place.

pub mod filter;
