// src/lib.rs
// Activity Portfolio - professional development activity tracker
//
// Architecture:
// - Domain-centric: activities, quotas and statistics live in the domain
// - Single writer: the ActivityManager owns the collection
// - Explicit: every mutation is validated, persisted, then committed
// - Event-driven: observers learn about changes through the event bus
// - Local-first: the collection is one JSON document in local storage

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    check_constraints,
    sample_drafts,
    validate_activity,
    validation_messages,
    // Activity
    Activity,
    ActivityDraft,
    ActivityFilter,
    ActivityId,
    ActivityStatus,
    // Configuration
    ActivityTypeRule,
    OwnerIdentity,
    PortfolioConfig,
    DEFAULT_STORAGE_KEY,
    // Snapshot
    ExportDocument,
    ExportMetadata,
    SNAPSHOT_VERSION,
    // Statistics
    MessageLevel,
    PortfolioStats,
    ThemeProgress,
    TypeQuota,
    ValidationMessage,
    DomainError,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    ActivityAdded,
    ActivityDeleted,
    ActivityUpdated,
    DomainEvent,
    EventBus,
    EventLogEntry,
    SampleDataSeeded,
    SnapshotImported,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ActivityRepository,
    InMemoryKeyValueStore,
    KeyValueStore,
    SqliteKeyValueStore,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{render_report, report_file_name, ActivityManager};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, EditSession, ErrorResponse, ErrorType, SubmitOutcome};
