// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod activity;
pub mod config;
pub mod snapshot;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Activity Domain
pub use activity::{
    check_constraints, coerce_hours, sample_drafts, validate_activity, Activity, ActivityDraft,
    ActivityFilter, ActivityId, ActivityStatus,
};

// Configuration
pub use config::{ActivityTypeRule, OwnerIdentity, PortfolioConfig, DEFAULT_STORAGE_KEY};

// Snapshot (export / restore)
pub use snapshot::{ExportDocument, ExportMetadata, SNAPSHOT_VERSION};

// Statistics Domain (Derived Data)
pub use statistics::{
    validation_messages, MessageLevel, PortfolioStats, ThemeProgress, TypeQuota,
    ValidationMessage,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedSnapshotVersion(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
