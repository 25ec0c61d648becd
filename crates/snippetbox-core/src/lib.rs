//! snippetbox-core
//!
//! Pure domain types for the snippet service.
//! No database or HTTP dependency — this is the shared vocabulary of Snippetbox.

pub mod error;
pub mod models;
