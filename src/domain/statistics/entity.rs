use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::activity::{Activity, ActivityId};
use crate::domain::config::PortfolioConfig;

/// Aggregate view of the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_hours: u32,
    pub total_activities: usize,
    pub completed_activities: usize,
    /// Distinct themes present in the collection
    pub themes: BTreeSet<String>,
    pub total_themes: usize,
    pub theme_hours: BTreeMap<String, u32>,
    pub type_count: BTreeMap<String, usize>,
    pub is_valid: bool,
}

impl PortfolioStats {
    /// Single pass over the collection
    pub fn compute(activities: &[Activity], config: &PortfolioConfig) -> Self {
        let mut total_hours = 0u32;
        let mut completed_activities = 0usize;
        let mut themes = BTreeSet::new();
        let mut theme_hours: BTreeMap<String, u32> = BTreeMap::new();
        let mut type_count: BTreeMap<String, usize> = BTreeMap::new();

        for activity in activities {
            total_hours = total_hours.saturating_add(activity.hours);
            themes.insert(activity.theme.clone());

            if activity.is_completed() {
                completed_activities += 1;
            }

            let hours = theme_hours.entry(activity.theme.clone()).or_insert(0);
            *hours = hours.saturating_add(activity.hours);
            *type_count.entry(activity.activity_type.clone()).or_insert(0) += 1;
        }

        let total_activities = activities.len();
        let total_themes = themes.len();
        let is_valid = total_hours == config.max_total_hours
            && total_themes >= config.min_themes
            && total_activities >= config.min_activities;

        Self {
            total_hours,
            total_activities,
            completed_activities,
            themes,
            total_themes,
            theme_hours,
            type_count,
            is_valid,
        }
    }

    /// Theme breakdown in configuration order, followed by any theme the
    /// configuration does not know about
    pub fn ordered_theme_hours<'a>(&'a self, config: &'a PortfolioConfig) -> Vec<(&'a str, u32)> {
        let mut ordered: Vec<(&str, u32)> = config
            .themes
            .iter()
            .filter_map(|theme| {
                self.theme_hours
                    .get(theme)
                    .map(|hours| (theme.as_str(), *hours))
            })
            .collect();

        ordered.extend(
            self.theme_hours
                .iter()
                .filter(|(theme, _)| !config.is_known_theme(theme))
                .map(|(theme, hours)| (theme.as_str(), *hours)),
        );
        ordered
    }
}

/// Per-theme progress card data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeProgress {
    pub theme: String,
    pub hours: u32,
    pub max_hours: u32,
    pub activity_count: usize,
    pub completed_count: usize,
}

impl ThemeProgress {
    /// One entry per configured theme, in configuration order
    pub fn for_all_themes(activities: &[Activity], config: &PortfolioConfig) -> Vec<Self> {
        config
            .themes
            .iter()
            .map(|theme| {
                let in_theme = activities.iter().filter(|a| &a.theme == theme);
                let (hours, activity_count, completed_count) =
                    in_theme.fold((0u32, 0usize, 0usize), |(h, n, c), a| {
                        (h.saturating_add(a.hours), n + 1, c + usize::from(a.is_completed()))
                    });
                Self {
                    theme: theme.clone(),
                    hours,
                    max_hours: config.max_hours_per_theme,
                    activity_count,
                    completed_count,
                }
            })
            .collect()
    }

    /// Fill ratio in percent (may exceed 100 for legacy data)
    pub fn percent(&self) -> f32 {
        if self.max_hours == 0 {
            return 0.0;
        }
        (self.hours as f32 / self.max_hours as f32) * 100.0
    }
}

/// How much room is left for a given activity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeQuota {
    pub type_key: String,
    pub label: String,
    pub max_hours: u32,
    pub max_count: Option<usize>,
    pub used: usize,
    /// None when the type is unbounded
    pub remaining: Option<usize>,
    pub limit_reached: bool,
}

impl TypeQuota {
    /// Quota for `type_key`, not counting `excluding` (the activity being edited)
    pub fn compute(
        activities: &[Activity],
        config: &PortfolioConfig,
        type_key: &str,
        excluding: Option<ActivityId>,
    ) -> Option<Self> {
        let rule = config.activity_type(type_key)?;
        let used = activities
            .iter()
            .filter(|a| a.activity_type == type_key && Some(a.id) != excluding)
            .count();
        let remaining = rule.max_count.map(|max| max.saturating_sub(used));

        Some(Self {
            type_key: rule.key.clone(),
            label: rule.label.clone(),
            max_hours: rule.max_hours,
            max_count: rule.max_count,
            used,
            remaining,
            limit_reached: remaining == Some(0),
        })
    }

    /// Form help text, e.g. `(max 10h) - 2 restante(s)`
    pub fn hint(&self) -> String {
        let mut hint = format!("(max {}h)", self.max_hours);
        if let (Some(max_count), Some(remaining)) = (self.max_count, self.remaining) {
            if self.limit_reached {
                hint.push_str(&format!(" - Limite atteinte ({} max)", max_count));
            } else {
                hint.push_str(&format!(" - {} restante(s)", remaining));
            }
        }
        hint
    }
}
