//! Statistics invariants:
//!
//! 1. Statistics are ALWAYS derived from the activity collection
//! 2. They can be recomputed at any time and are never persisted as truth
//! 3. Computing them NEVER alters the collection
//! 4. `is_valid` requires the hour target to be met exactly

pub mod entity;
pub mod messages;

pub use entity::{PortfolioStats, ThemeProgress, TypeQuota};
pub use messages::{validation_messages, MessageLevel, ValidationMessage};
