//! geraete-cli library root.
//!
//! Re-exports the command-line adapter's modules so that integration tests
//! can drive the save / export flow without spawning the binary.

pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
