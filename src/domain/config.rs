// src/domain/config.rs
//
// Portfolio configuration - themes, activity-type rules and quotas.
//
// The configuration is an immutable value handed to the manager.
// Nothing in the crate reads a global constant.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::error::AppResult;

/// Key under which the activity collection is persisted
pub const DEFAULT_STORAGE_KEY: &str = "portfolio_activities";

/// Rules attached to one activity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeRule {
    /// Stable key stored on activities (e.g. "hackathon")
    pub key: String,

    /// Human-readable label
    pub label: String,

    /// Maximum number of activities of this type (None = unbounded)
    pub max_count: Option<usize>,

    /// Maximum hours a single activity of this type may declare
    pub max_hours: u32,
}

impl ActivityTypeRule {
    pub fn new(key: &str, label: &str, max_count: Option<usize>, max_hours: u32) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            max_count,
            max_hours,
        }
    }
}

/// Who the portfolio belongs to (export metadata, report header)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerIdentity {
    pub name: String,
    pub organization: String,
}

impl Default for OwnerIdentity {
    fn default() -> Self {
        Self {
            name: "Noah Rogier".to_string(),
            organization: "EPHEC".to_string(),
        }
    }
}

/// Complete quota configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioConfig {
    pub max_total_hours: u32,
    pub min_themes: usize,
    pub min_activities: usize,
    pub max_hours_per_theme: u32,
    pub max_hours_per_activity: u32,
    pub activity_types: Vec<ActivityTypeRule>,
    pub themes: Vec<String>,
    pub owner: OwnerIdentity,
    pub storage_key: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            max_total_hours: 60,
            min_themes: 6,
            min_activities: 6,
            max_hours_per_theme: 10,
            max_hours_per_activity: 10,
            activity_types: vec![
                ActivityTypeRule::new("hackathon", "Hackathon", Some(3), 10),
                ActivityTypeRule::new("formation_ligne", "Formation en ligne", Some(2), 10),
                ActivityTypeRule::new("formation_presentiel", "Formation présentiel", Some(3), 10),
                ActivityTypeRule::new("conference", "Conférence", Some(1), 10),
                ActivityTypeRule::new("visite", "Visite d'entreprise", Some(1), 10),
                ActivityTypeRule::new("salon", "Salon informatique", Some(1), 10),
                ActivityTypeRule::new("job_day", "IT Job Day", Some(1), 10),
                ActivityTypeRule::new("projet", "Projet personnel", None, 10),
                ActivityTypeRule::new("autre", "Autre", None, 10),
            ],
            themes: [
                "Développement",
                "Réseaux",
                "Sécurité",
                "Électronique/IoT",
                "Soft skills",
                "Langues",
                "Communication",
                "Droit IT",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            owner: OwnerIdentity::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a configuration document. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let config: PortfolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Structural checks on the configuration itself
    pub fn validate(&self) -> DomainResult<()> {
        if self.max_total_hours == 0 || self.max_hours_per_theme == 0 || self.max_hours_per_activity == 0 {
            return Err(DomainError::InvalidConfiguration(
                "hour limits must be greater than zero".to_string(),
            ));
        }
        if self.themes.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "at least one theme is required".to_string(),
            ));
        }
        if self.storage_key.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "storage key cannot be empty".to_string(),
            ));
        }

        let mut seen_themes = HashSet::new();
        for theme in &self.themes {
            if !seen_themes.insert(theme.as_str()) {
                return Err(DomainError::InvalidConfiguration(format!(
                    "duplicate theme '{}'",
                    theme
                )));
            }
        }

        let mut seen_types = HashSet::new();
        for rule in &self.activity_types {
            if !seen_types.insert(rule.key.as_str()) {
                return Err(DomainError::InvalidConfiguration(format!(
                    "duplicate activity type '{}'",
                    rule.key
                )));
            }
            if rule.max_hours == 0 {
                return Err(DomainError::InvalidConfiguration(format!(
                    "activity type '{}' must allow at least one hour",
                    rule.key
                )));
            }
        }

        Ok(())
    }

    pub fn activity_type(&self, key: &str) -> Option<&ActivityTypeRule> {
        self.activity_types.iter().find(|rule| rule.key == key)
    }

    /// Display label for a type key, falling back to the key itself
    pub fn type_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.activity_type(key)
            .map(|rule| rule.label.as_str())
            .unwrap_or(key)
    }

    /// Per-activity hour ceiling for a type key
    pub fn max_hours_for(&self, key: &str) -> u32 {
        self.activity_type(key)
            .map(|rule| rule.max_hours)
            .unwrap_or(self.max_hours_per_activity)
    }

    pub fn is_known_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PortfolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.themes.len(), 8);
        assert_eq!(config.activity_types.len(), 9);
    }

    #[test]
    fn test_type_lookup() {
        let config = PortfolioConfig::default();
        assert_eq!(config.type_label("conference"), "Conférence");
        assert_eq!(config.activity_type("conference").unwrap().max_count, Some(1));
        assert_eq!(config.activity_type("projet").unwrap().max_count, None);
        assert_eq!(config.type_label("inconnu"), "inconnu");
        assert_eq!(config.max_hours_for("inconnu"), 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PortfolioConfig::from_json_str(r#"{ "maxTotalHours": 40 }"#).unwrap();
        assert_eq!(config.max_total_hours, 40);
        assert_eq!(config.max_hours_per_theme, 10);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut config = PortfolioConfig::default();
        config
            .activity_types
            .push(ActivityTypeRule::new("hackathon", "Encore", None, 10));
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_cap_rejected_from_json() {
        let result = PortfolioConfig::from_json_str(r#"{ "maxHoursPerTheme": 0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, r#"{ "minThemes": 3, "themes": ["A", "B", "C"] }"#).unwrap();

        let config = PortfolioConfig::from_json_file(&path).unwrap();
        assert_eq!(config.min_themes, 3);
        assert!(config.is_known_theme("B"));
        assert!(!config.is_known_theme("Sécurité"));
    }
}
