use serde::{Deserialize, Serialize};

use super::entity::PortfolioStats;
use crate::domain::config::PortfolioConfig;

/// Severity of a dashboard message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    #[serde(rename = "type")]
    pub level: MessageLevel,
    pub text: String,
}

impl ValidationMessage {
    fn new(level: MessageLevel, text: String) -> Self {
        Self { level, text }
    }
}

/// Dashboard status messages derived from the statistics.
///
/// Exactly one hours message (short, exceeded or met), then an optional
/// theme shortfall, then an optional activity-count shortfall.
pub fn validation_messages(stats: &PortfolioStats, config: &PortfolioConfig) -> Vec<ValidationMessage> {
    let mut messages = Vec::new();
    let target = config.max_total_hours;

    if stats.total_hours < target {
        messages.push(ValidationMessage::new(
            MessageLevel::Warning,
            format!(
                "Il manque {} heures pour atteindre les {}h requises",
                target - stats.total_hours,
                target
            ),
        ));
    } else if stats.total_hours > target {
        messages.push(ValidationMessage::new(
            MessageLevel::Error,
            format!(
                "Dépassement de {} heures (maximum {}h)",
                stats.total_hours - target,
                target
            ),
        ));
    } else {
        messages.push(ValidationMessage::new(
            MessageLevel::Success,
            format!("Objectif de {} heures atteint!", target),
        ));
    }

    if stats.total_themes < config.min_themes {
        messages.push(ValidationMessage::new(
            MessageLevel::Warning,
            format!(
                "Il manque {} thème(s) (minimum {})",
                config.min_themes - stats.total_themes,
                config.min_themes
            ),
        ));
    }

    if stats.total_activities < config.min_activities {
        messages.push(ValidationMessage::new(
            MessageLevel::Warning,
            format!(
                "Il manque {} activité(s) (minimum {})",
                config.min_activities - stats.total_activities,
                config.min_activities
            ),
        ));
    }

    messages
}
