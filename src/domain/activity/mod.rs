pub mod entity;
pub mod filter;
pub mod invariants;
pub mod samples;

pub use entity::{coerce_hours, Activity, ActivityDraft, ActivityId, ActivityStatus};
pub use filter::ActivityFilter;
pub use invariants::{check_constraints, validate_activity};
pub use samples::sample_drafts;
