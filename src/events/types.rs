// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// ACTIVITY EVENTS
// ============================================================================

/// Emitted after a new activity has been persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub activity_id: Uuid,
    pub theme: String,
    pub hours: u32,
}

impl ActivityAdded {
    pub fn new(activity_id: Uuid, theme: String, hours: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            activity_id,
            theme,
            hours,
        }
    }
}

impl DomainEvent for ActivityAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ActivityAdded" }
}

/// Emitted after an activity has been replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub activity_id: Uuid,
}

impl ActivityUpdated {
    pub fn new(activity_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            activity_id,
        }
    }
}

impl DomainEvent for ActivityUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ActivityUpdated" }
}

/// Emitted after an activity has been removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub activity_id: Uuid,
}

impl ActivityDeleted {
    pub fn new(activity_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            activity_id,
        }
    }
}

impl DomainEvent for ActivityDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ActivityDeleted" }
}

// ============================================================================
// COLLECTION EVENTS
// ============================================================================

/// Emitted when an empty store was filled with the fixture activities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDataSeeded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub activity_count: usize,
}

impl SampleDataSeeded {
    pub fn new(activity_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            activity_count,
        }
    }
}

impl DomainEvent for SampleDataSeeded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SampleDataSeeded" }
}

/// Emitted when the collection was replaced from an export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotImported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub activity_count: usize,
}

impl SnapshotImported {
    pub fn new(activity_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            activity_count,
        }
    }
}

impl DomainEvent for SnapshotImported {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SnapshotImported" }
}
