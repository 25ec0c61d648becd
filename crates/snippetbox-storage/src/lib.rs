//! snippetbox-storage
//!
//! SQL persistence for snippets. Thin wrapper around a sqlx SQLite pool.

pub mod error;
pub mod pool;
pub mod schema;
pub mod snippets;
