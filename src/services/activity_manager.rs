// src/services/activity_manager.rs
//
// Activity Manager - owner of the activity collection
//
// CRITICAL RULES:
// - The manager is the ONLY writer of the collection
// - Every mutation is validated before anything changes
// - Every mutation is persisted before it is committed in memory
// - Callers receive copies, never references into the collection
// - Events are emitted only after a successful commit

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    check_constraints, sample_drafts, validation_messages, Activity, ActivityDraft,
    ActivityFilter, ActivityId, DomainError, ExportDocument, PortfolioConfig, PortfolioStats,
    ThemeProgress, TypeQuota, ValidationMessage,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    ActivityAdded, ActivityDeleted, ActivityUpdated, EventBus, SampleDataSeeded,
    SnapshotImported,
};
use crate::repositories::{ActivityRepository, KeyValueStore};
use crate::services::report::render_report;

pub struct ActivityManager {
    activities: Vec<Activity>,
    repository: ActivityRepository,
    config: Arc<PortfolioConfig>,
    event_bus: Arc<EventBus>,
}

impl ActivityManager {
    /// Load the persisted collection, seeding the sample activities when
    /// nothing usable is stored.
    ///
    /// Corrupt persisted data is logged and treated as empty. Store
    /// failures (I/O, database) are returned.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        config: Arc<PortfolioConfig>,
        event_bus: Arc<EventBus>,
    ) -> AppResult<Self> {
        let repository = ActivityRepository::new(store, config.storage_key.clone());

        let activities = match repository.load_all() {
            Ok(activities) => activities,
            Err(AppError::CorruptedData(reason)) => {
                log::error!("Discarding unreadable activity data: {}", reason);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let mut manager = Self {
            activities,
            repository,
            config,
            event_bus,
        };

        if manager.activities.is_empty() {
            manager.seed_samples()?;
        } else {
            log::info!("Loaded {} activities", manager.activities.len());
        }

        Ok(manager)
    }

    fn seed_samples(&mut self) -> AppResult<()> {
        let samples: Vec<Activity> = sample_drafts().into_iter().map(Activity::from_draft).collect();
        self.commit(samples)?;

        log::info!("Seeded {} sample activities", self.activities.len());
        self.event_bus.emit(SampleDataSeeded::new(self.activities.len()));
        Ok(())
    }

    /// Persist `next`, then make it the current collection
    fn commit(&mut self, next: Vec<Activity>) -> AppResult<()> {
        self.repository.save_all(&next)?;
        self.activities = next;
        Ok(())
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Validate and append a new activity
    pub fn add(&mut self, draft: ActivityDraft) -> AppResult<Activity> {
        let candidate = Activity::from_draft(draft);

        let errors = self.validate_constraints(&candidate, &self.activities);
        if !errors.is_empty() {
            log::warn!("Rejected new activity '{}': {:?}", candidate.name, errors);
            return Err(AppError::Validation(errors));
        }

        let mut next = self.activities.clone();
        next.push(candidate.clone());
        self.commit(next)?;

        log::debug!("Added activity {} ({}h)", candidate.id, candidate.hours);
        self.event_bus.emit(ActivityAdded::new(
            candidate.id,
            candidate.theme.clone(),
            candidate.hours,
        ));

        Ok(candidate)
    }

    /// Merge `draft` into the activity `id` and replace it in place.
    ///
    /// The record's own previous version is left out of the quota
    /// computation so its hours, theme and type do not count twice.
    pub fn update(&mut self, id: ActivityId, draft: ActivityDraft) -> AppResult<Activity> {
        let index = self.position(id).ok_or(AppError::NotFound(id))?;

        let merged = self.activities[index].to_draft().merged_with(draft);
        let candidate = Activity::from_draft(ActivityDraft {
            id: Some(id),
            updated_at: Some(Utc::now()),
            ..merged
        });

        let mut others = self.activities.clone();
        others.remove(index);

        let errors = self.validate_constraints(&candidate, &others);
        if !errors.is_empty() {
            log::warn!("Rejected update of activity {}: {:?}", id, errors);
            return Err(AppError::Validation(errors));
        }

        let mut next = self.activities.clone();
        next[index] = candidate.clone();
        self.commit(next)?;

        log::debug!("Updated activity {}", id);
        self.event_bus.emit(ActivityUpdated::new(id));

        Ok(candidate)
    }

    /// Remove the activity `id`. Returns false when there was nothing to remove.
    pub fn delete(&mut self, id: ActivityId) -> AppResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let mut next = self.activities.clone();
        next.remove(index);
        self.commit(next)?;

        log::debug!("Deleted activity {}", id);
        self.event_bus.emit(ActivityDeleted::new(id));

        Ok(true)
    }

    /// Replace the whole collection with the activities of an export document.
    ///
    /// Activities are re-validated in document order as if added one by one
    /// to an empty portfolio. Any failure leaves the collection untouched.
    pub fn import_snapshot(&mut self, json: &str) -> AppResult<usize> {
        let document = ExportDocument::parse(json)?;

        let mut accepted: Vec<Activity> = Vec::with_capacity(document.activities.len());
        let mut errors = Vec::new();

        for activity in document.activities {
            if accepted.iter().any(|a| a.id == activity.id) {
                return Err(DomainError::InvariantViolation(format!(
                    "duplicate activity id {} in snapshot",
                    activity.id
                ))
                .into());
            }

            let activity_errors = self.validate_constraints(&activity, &accepted);
            if activity_errors.is_empty() {
                accepted.push(activity);
            } else {
                errors.extend(
                    activity_errors
                        .into_iter()
                        .map(|e| format!("{}: {}", activity.name, e)),
                );
            }
        }

        if !errors.is_empty() {
            log::warn!("Rejected snapshot import: {} problem(s)", errors.len());
            return Err(AppError::Validation(errors));
        }

        let count = accepted.len();
        self.commit(accepted)?;

        log::info!("Imported {} activities from snapshot", count);
        self.event_bus.emit(SnapshotImported::new(count));

        Ok(count)
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    /// Field errors, then total hours, theme hours and type count over
    /// `others`, which must not contain `candidate`'s own record
    pub fn validate_constraints(&self, candidate: &Activity, others: &[Activity]) -> Vec<String> {
        check_constraints(candidate, others, &self.config)
    }

    // ========================================================================
    // READ SIDE
    // ========================================================================

    pub fn get(&self, id: ActivityId) -> Option<Activity> {
        self.activities.iter().find(|a| a.id == id).cloned()
    }

    /// Activities matching `filter`, in insertion order
    pub fn list(&self, filter: &ActivityFilter) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats::compute(&self.activities, &self.config)
    }

    pub fn validation_messages(&self) -> Vec<ValidationMessage> {
        validation_messages(&self.stats(), &self.config)
    }

    pub fn theme_progress(&self) -> Vec<ThemeProgress> {
        ThemeProgress::for_all_themes(&self.activities, &self.config)
    }

    /// Remaining room for `type_key`, not counting the activity `excluding`
    pub fn type_quota(&self, type_key: &str, excluding: Option<ActivityId>) -> Option<TypeQuota> {
        TypeQuota::compute(&self.activities, &self.config, type_key, excluding)
    }

    pub fn snapshot(&self) -> ExportDocument {
        ExportDocument::new(self.activities.clone(), &self.config, Utc::now())
    }

    /// Pretty-printed export document
    pub fn export_snapshot(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    pub fn generate_report(&self) -> String {
        render_report(
            &self.activities,
            &self.stats(),
            &self.config,
            Utc::now().date_naive(),
        )
    }

    fn position(&self, id: ActivityId) -> Option<usize> {
        self.activities.iter().position(|a| a.id == id)
    }
}
