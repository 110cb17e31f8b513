//! First-run fixture activities.
//!
//! Seeded when the store holds no activities so the dashboard is never
//! empty on first launch. Seeding bypasses quota validation.

use chrono::NaiveDate;

use super::entity::{ActivityDraft, ActivityStatus};

pub fn sample_drafts() -> Vec<ActivityDraft> {
    vec![
        ActivityDraft {
            theme: Some("Développement".to_string()),
            name: Some("Formation React.js avancé".to_string()),
            activity_type: Some("formation_ligne".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
            hours: Some(10),
            proof: Some("Certificat Udemy CERT-REACT-2024".to_string()),
            status: Some(ActivityStatus::Completed),
            analysis: Some(
                "Cette formation m'a permis d'approfondir mes connaissances en React...".to_string(),
            ),
            ..Default::default()
        },
        ActivityDraft {
            theme: Some("Sécurité".to_string()),
            name: Some("Cybersecurity Challenge EPHEC".to_string()),
            activity_type: Some("hackathon".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 2, 20),
            hours: Some(10),
            proof: Some("Badge participation + Classement 3ème place".to_string()),
            status: Some(ActivityStatus::Completed),
            analysis: Some(
                "Participation au challenge de cybersécurité organisé par l'EPHEC...".to_string(),
            ),
            ..Default::default()
        },
        ActivityDraft {
            theme: Some("Soft skills".to_string()),
            name: Some("Formation Gestion de projet Agile".to_string()),
            activity_type: Some("formation_presentiel".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 4, 10),
            hours: Some(8),
            proof: Some("Attestation de présence".to_string()),
            status: Some(ActivityStatus::InProgress),
            analysis: Some(String::new()),
            ..Default::default()
        },
    ]
}
