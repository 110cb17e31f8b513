use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::config::PortfolioConfig;

/// Identifier of a logged activity
pub type ActivityId = Uuid;

/// One learning activity recorded in the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ActivityDraft")]
pub struct Activity {
    /// Internal immutable identifier
    pub id: ActivityId,

    /// Theme label (one of the configured themes)
    pub theme: String,

    /// Short descriptive name
    pub name: String,

    /// Activity-type key (one of the configured types)
    #[serde(rename = "type")]
    pub activity_type: String,

    /// Calendar date of the activity
    pub date: Option<NaiveDate>,

    /// Declared hours
    pub hours: u32,

    /// Evidence reference (certificate, badge, ...)
    pub proof: String,

    pub status: ActivityStatus,

    /// Reflective analysis, may be empty
    pub analysis: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Progress of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    #[serde(rename = "À faire", alias = "todo")]
    Todo,
    #[serde(rename = "En cours", alias = "in_progress")]
    InProgress,
    #[serde(rename = "Complété", alias = "completed")]
    Completed,
}

impl ActivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Todo => "À faire",
            ActivityStatus::InProgress => "En cours",
            ActivityStatus::Completed => "Complété",
        }
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Loose input record for creating or editing an activity.
///
/// Every field is optional: a draft is what a form submits or what an
/// older persisted record contains. `Activity::from_draft` fills defaults,
/// and validation reports whatever is still missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityDraft {
    pub id: Option<ActivityId>,
    pub theme: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "deserialize_hours")]
    pub hours: Option<u32>,
    pub proof: Option<String>,
    pub status: Option<ActivityStatus>,
    pub analysis: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ActivityDraft {
    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merged_with(self, other: ActivityDraft) -> ActivityDraft {
        ActivityDraft {
            id: other.id.or(self.id),
            theme: other.theme.or(self.theme),
            name: other.name.or(self.name),
            activity_type: other.activity_type.or(self.activity_type),
            date: other.date.or(self.date),
            hours: other.hours.or(self.hours),
            proof: other.proof.or(self.proof),
            status: other.status.or(self.status),
            analysis: other.analysis.or(self.analysis),
            created_at: other.created_at.or(self.created_at),
            updated_at: other.updated_at.or(self.updated_at),
        }
    }
}

impl Activity {
    /// Build an activity from a draft, filling in id, status, analysis and
    /// timestamps when they are absent
    pub fn from_draft(draft: ActivityDraft) -> Self {
        let now = Utc::now();
        Self {
            id: draft.id.unwrap_or_else(Uuid::new_v4),
            theme: draft.theme.unwrap_or_default(),
            name: draft.name.unwrap_or_default(),
            activity_type: draft.activity_type.unwrap_or_default(),
            date: draft.date,
            hours: draft.hours.unwrap_or(0),
            proof: draft.proof.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            analysis: draft.analysis.unwrap_or_default(),
            created_at: draft.created_at.unwrap_or(now),
            updated_at: draft.updated_at.unwrap_or(now),
        }
    }

    /// Attribute record carrying every field of this activity
    pub fn to_draft(&self) -> ActivityDraft {
        ActivityDraft {
            id: Some(self.id),
            theme: Some(self.theme.clone()),
            name: Some(self.name.clone()),
            activity_type: Some(self.activity_type.clone()),
            date: self.date,
            hours: Some(self.hours),
            proof: Some(self.proof.clone()),
            status: Some(self.status),
            analysis: Some(self.analysis.clone()),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }

    /// Field-level checks, see `validate_activity`
    pub fn validate(&self, config: &PortfolioConfig) -> Vec<String> {
        super::invariants::validate_activity(self, config)
    }

    pub fn is_completed(&self) -> bool {
        self.status == ActivityStatus::Completed
    }
}

impl From<ActivityDraft> for Activity {
    fn from(draft: ActivityDraft) -> Self {
        Activity::from_draft(draft)
    }
}

/// Coerce a loosely typed hours value to an integer.
///
/// Numbers are truncated, strings are read up to the first non-digit.
/// Negative values become 0 so validation rejects them.
pub fn coerce_hours(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(clamp_hours(i))
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| clamp_hours(f.trunc() as i64))
            }
        }
        serde_json::Value::String(s) => parse_leading_integer(s).map(clamp_hours),
        _ => None,
    }
}

fn clamp_hours(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

fn deserialize_hours<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_hours(&value))
}

/// Dates are read as `YYYY-MM-DD`. Anything else is treated as absent so
/// validation reports it instead of the record failing to load.
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(str::trim)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}
