//! Flutter bridge surface for the contacts core.

pub mod api;
