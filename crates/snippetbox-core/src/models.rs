pub mod expiry;
pub mod snippet;
