//! geraete-checklist
//!
//! The inspection item schema and the workflow that turns raw form input
//! into a validated, persisted or exported check record.
//!
//! Public API:
//! - `ChecklistSchema::default_device_check()`: the built-in item list
//! - `ChecklistWorkflow::collect()`: raw answers + metadata → `CheckRecord`
//! - `ChecklistWorkflow::collect_noticed()`: the same, plus notices such as
//!   a replaced check date
//! - `ChecklistWorkflow::validate_required()`: titles of open required items
//! - `ChecklistWorkflow::save()`: validate, then write under the derived key
//! - `ChecklistWorkflow::export()`: JSON artifact, never gated by validation

pub mod builtin;
pub mod error;
pub mod schema;
pub mod workflow;

pub use crate::error::{SchemaError, WorkflowError};
pub use crate::schema::ChecklistSchema;
pub use crate::workflow::{ChecklistWorkflow, Collected, CollectNotice, ExportOutcome};
