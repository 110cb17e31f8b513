use serde::{Deserialize, Serialize};

use super::entity::{Activity, ActivityStatus};

/// Read-side projection over the collection (theme and/or status)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityFilter {
    pub theme: Option<String>,
    pub status: Option<ActivityStatus>,
}

impl ActivityFilter {
    pub fn by_theme(theme: &str) -> Self {
        Self {
            theme: Some(theme.to_string()),
            status: None,
        }
    }

    pub fn by_status(status: ActivityStatus) -> Self {
        Self {
            theme: None,
            status: Some(status),
        }
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        let theme_ok = self
            .theme
            .as_deref()
            .map_or(true, |theme| activity.theme == theme);
        let status_ok = self.status.map_or(true, |status| activity.status == status);
        theme_ok && status_ok
    }
}
