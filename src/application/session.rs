// src/application/session.rs
//
// Edit Session - the add/edit form workflow
//
// The "currently editing" id is UI state. It lives here, next to the
// manager, so the manager itself only knows about the collection.

use serde::Serialize;

use crate::domain::{Activity, ActivityDraft, ActivityId, TypeQuota};
use crate::error::{AppError, AppResult};
use crate::services::ActivityManager;

/// What a successful form submission did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "activity", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Added(Activity),
    Updated(Activity),
}

impl SubmitOutcome {
    pub fn activity(&self) -> &Activity {
        match self {
            SubmitOutcome::Added(activity) | SubmitOutcome::Updated(activity) => activity,
        }
    }

    /// Success notification shown to the user
    pub fn notification(&self) -> &'static str {
        match self {
            SubmitOutcome::Added(_) => "Activité ajoutée avec succès",
            SubmitOutcome::Updated(_) => "Activité mise à jour avec succès",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct EditSession {
    editing_id: Option<ActivityId>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<ActivityId> {
        self.editing_id
    }

    /// Open an empty form
    pub fn begin_add(&mut self) {
        self.editing_id = None;
    }

    /// Open the form on an existing activity and return it for prefill
    pub fn begin_edit(&mut self, manager: &ActivityManager, id: ActivityId) -> AppResult<Activity> {
        let activity = manager.get(id).ok_or(AppError::NotFound(id))?;
        self.editing_id = Some(id);
        Ok(activity)
    }

    pub fn cancel(&mut self) {
        self.editing_id = None;
    }

    /// Add or update depending on the session state.
    ///
    /// The session is closed only on success, so a rejected edit can be
    /// corrected and resubmitted.
    pub fn submit(
        &mut self,
        manager: &mut ActivityManager,
        draft: ActivityDraft,
    ) -> AppResult<SubmitOutcome> {
        let outcome = match self.editing_id {
            Some(id) => SubmitOutcome::Updated(manager.update(id, draft)?),
            None => SubmitOutcome::Added(manager.add(draft)?),
        };

        self.editing_id = None;
        Ok(outcome)
    }

    /// Quota for `type_key`, ignoring the activity being edited
    pub fn hours_hint(&self, manager: &ActivityManager, type_key: &str) -> Option<TypeQuota> {
        manager.type_quota(type_key, self.editing_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::{ActivityFilter, PortfolioConfig};
    use crate::events::EventBus;
    use crate::repositories::InMemoryKeyValueStore;

    fn manager() -> ActivityManager {
        ActivityManager::new(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(PortfolioConfig::default()),
            Arc::new(EventBus::new()),
        )
        .unwrap()
    }

    fn conference_draft() -> ActivityDraft {
        ActivityDraft {
            theme: Some("Réseaux".to_string()),
            name: Some("Conférence réseau".to_string()),
            activity_type: Some("conference".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 9, 12),
            hours: Some(3),
            proof: Some("Badge".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_without_edit_adds() {
        let mut manager = manager();
        let mut session = EditSession::new();
        session.begin_add();

        let outcome = session.submit(&mut manager, conference_draft()).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Added(_)));
        assert_eq!(outcome.notification(), "Activité ajoutée avec succès");
        assert_eq!(manager.len(), 4);
    }

    #[test]
    fn test_submit_while_editing_updates_and_closes() {
        let mut manager = manager();
        let mut session = EditSession::new();
        let first = manager.list(&ActivityFilter::default())[0].clone();

        let prefill = session.begin_edit(&manager, first.id).unwrap();
        assert_eq!(prefill, first);
        assert_eq!(session.editing_id(), Some(first.id));

        let outcome = session
            .submit(
                &mut manager,
                ActivityDraft {
                    hours: Some(9),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(outcome.notification(), "Activité mise à jour avec succès");
        assert_eq!(outcome.activity().hours, 9);
        assert_eq!(session.editing_id(), None);
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_rejected_submit_keeps_editing() {
        let mut manager = manager();
        let mut session = EditSession::new();
        let first = manager.list(&ActivityFilter::default())[0].clone();
        session.begin_edit(&manager, first.id).unwrap();

        let result = session.submit(
            &mut manager,
            ActivityDraft {
                hours: Some(11),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.editing_id(), Some(first.id));
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let manager = manager();
        let mut session = EditSession::new();

        let result = session.begin_edit(&manager, uuid::Uuid::new_v4());

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(session.editing_id(), None);
    }

    #[test]
    fn test_hours_hint_ignores_edited_activity() {
        let mut manager = manager();
        let mut session = EditSession::new();
        let conference = manager.add(conference_draft()).unwrap();

        let hint = session.hours_hint(&manager, "conference").unwrap();
        assert!(hint.limit_reached);

        session.begin_edit(&manager, conference.id).unwrap();
        let hint = session.hours_hint(&manager, "conference").unwrap();
        assert!(!hint.limit_reached);
        assert_eq!(hint.hint(), "(max 10h) - 1 restante(s)");

        session.cancel();
        assert_eq!(session.editing_id(), None);
    }
}
