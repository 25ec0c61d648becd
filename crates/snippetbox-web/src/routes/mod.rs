pub mod health;
pub mod snippets;
pub mod static_files;
