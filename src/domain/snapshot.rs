use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::activity::Activity;
use crate::domain::config::PortfolioConfig;
use crate::domain::statistics::PortfolioStats;
use crate::domain::{DomainError, DomainResult};

/// Export format version understood by `import_snapshot`
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Full backup of the portfolio: metadata, derived stats and activities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub metadata: ExportMetadata,
    pub stats: PortfolioStats,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_date: DateTime<Utc>,
    pub version: String,
    pub owner: String,
    pub organization: String,
}

impl ExportDocument {
    pub fn new(activities: Vec<Activity>, config: &PortfolioConfig, exported_at: DateTime<Utc>) -> Self {
        let stats = PortfolioStats::compute(&activities, config);
        Self {
            metadata: ExportMetadata {
                export_date: exported_at,
                version: SNAPSHOT_VERSION.to_string(),
                owner: config.owner.name.clone(),
                organization: config.owner.organization.clone(),
            },
            stats,
            activities,
        }
    }

    /// Parse an export and reject versions this build does not read
    pub fn parse(json: &str) -> crate::error::AppResult<Self> {
        let document: ExportDocument = serde_json::from_str(json)?;
        document.check_version()?;
        Ok(document)
    }

    pub fn check_version(&self) -> DomainResult<()> {
        if self.metadata.version != SNAPSHOT_VERSION {
            return Err(DomainError::UnsupportedSnapshotVersion(
                self.metadata.version.clone(),
            ));
        }
        Ok(())
    }

    /// Suggested download name, e.g. `portfolio_activites_2024-05-01.json`
    pub fn file_name(&self) -> String {
        format!(
            "portfolio_activites_{}.json",
            self.metadata.export_date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::{sample_drafts, Activity};
    use chrono::TimeZone;

    fn exported_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let config = PortfolioConfig::default();
        let activities: Vec<Activity> = sample_drafts().into_iter().map(Activity::from_draft).collect();
        let document = ExportDocument::new(activities, &config, exported_at());

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["metadata"]["version"], "1.0");
        assert_eq!(value["metadata"]["owner"], "Noah Rogier");
        assert_eq!(value["metadata"]["organization"], "EPHEC");
        assert_eq!(value["stats"]["totalHours"], 28);
        assert_eq!(value["activities"].as_array().unwrap().len(), 3);
        assert_eq!(document.file_name(), "portfolio_activites_2024-05-01.json");
    }

    #[test]
    fn test_parse_accepts_own_output() {
        let config = PortfolioConfig::default();
        let activities: Vec<Activity> = sample_drafts().into_iter().map(Activity::from_draft).collect();
        let document = ExportDocument::new(activities, &config, exported_at());

        let json = serde_json::to_string_pretty(&document).unwrap();
        assert_eq!(ExportDocument::parse(&json).unwrap(), document);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut document = ExportDocument::new(Vec::new(), &PortfolioConfig::default(), exported_at());
        document.metadata.version = "2.0".to_string();
        assert!(matches!(
            document.check_version(),
            Err(DomainError::UnsupportedSnapshotVersion(v)) if v == "2.0"
        ));
    }
}
