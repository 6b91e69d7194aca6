//! geraete-core
//!
//! Pure domain types and storage key conventions for the device check.
//! No I/O here: this is the shared vocabulary of the other crates.

pub mod error;
pub mod models;
pub mod storage_keys;
