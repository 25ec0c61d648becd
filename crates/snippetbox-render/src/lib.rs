//! snippetbox-render
//!
//! Pre-parsed HTML templates, keyed by page name.

pub mod cache;
pub mod error;
