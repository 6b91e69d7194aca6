pub mod item;
pub mod meta;
pub mod record;
pub mod response;

pub use item::ChecklistItemDefinition;
pub use meta::{RawMeta, SessionMetadata};
pub use record::{CheckRecord, StoredView};
pub use response::{CheckResult, ItemResponse, RawAnswer, RawAnswers};
