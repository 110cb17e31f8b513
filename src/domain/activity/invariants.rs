use super::entity::Activity;
use crate::domain::config::PortfolioConfig;

/// Field-level checks on a single activity.
///
/// Returns one message per violated rule, in a fixed order:
/// theme, name, type, date, hours (lower then upper bound), proof.
/// Never looks at other activities.
pub fn validate_activity(activity: &Activity, config: &PortfolioConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&activity.theme) {
        errors.push("Le thème est requis".to_string());
    } else if !config.is_known_theme(&activity.theme) {
        errors.push(format!("Thème inconnu: {}", activity.theme));
    }

    if is_blank(&activity.name) {
        errors.push("Le nom de l'activité est requis".to_string());
    }

    if is_blank(&activity.activity_type) {
        errors.push("Le type d'activité est requis".to_string());
    } else if config.activity_type(&activity.activity_type).is_none() {
        errors.push(format!("Type d'activité inconnu: {}", activity.activity_type));
    }

    if activity.date.is_none() {
        errors.push("La date est requise".to_string());
    }

    if activity.hours < 1 {
        errors.push("Les heures doivent être supérieures à 0".to_string());
    }
    let max_hours = config.max_hours_for(&activity.activity_type);
    if activity.hours > max_hours {
        errors.push(format!("Maximum {} heures par activité", max_hours));
    }

    if is_blank(&activity.proof) {
        errors.push("Une preuve est requise".to_string());
    }

    errors
}

/// Field checks plus the cross-record quotas.
///
/// `others` must not contain the candidate itself (nor, for an update,
/// the version being replaced). Order: field errors, total hours,
/// theme hours, type count.
pub fn check_constraints(
    candidate: &Activity,
    others: &[Activity],
    config: &PortfolioConfig,
) -> Vec<String> {
    let mut errors = validate_activity(candidate, config);

    // Hours are summed in u64: a single record may hold up to u32::MAX.
    let total_hours: u64 = others.iter().map(|a| u64::from(a.hours)).sum::<u64>()
        + u64::from(candidate.hours);
    if total_hours > u64::from(config.max_total_hours) {
        errors.push(format!(
            "Dépassement du maximum de {}h (actuellement {}h)",
            config.max_total_hours, total_hours
        ));
    }

    let theme_hours: u64 = others
        .iter()
        .filter(|a| a.theme == candidate.theme)
        .map(|a| u64::from(a.hours))
        .sum::<u64>()
        + u64::from(candidate.hours);
    if theme_hours > u64::from(config.max_hours_per_theme) {
        errors.push(format!(
            "Maximum {}h pour le thème {} (actuellement {}h)",
            config.max_hours_per_theme, candidate.theme, theme_hours
        ));
    }

    if let Some(rule) = config.activity_type(&candidate.activity_type) {
        if let Some(max_count) = rule.max_count {
            let type_count = others
                .iter()
                .filter(|a| a.activity_type == candidate.activity_type)
                .count()
                + 1;
            if type_count > max_count {
                errors.push(format!(
                    "Maximum {} activité(s) de type {}",
                    max_count, rule.label
                ));
            }
        }
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Activity invariants:
///
/// 1. Identity (UUID) never changes after creation
/// 2. Theme, name, type, date and proof are required
/// 3. Hours lie in [1, max hours of the type]
/// 4. Total hours never exceed the portfolio maximum
/// 5. Hours per theme never exceed the theme cap
/// 6. Bounded types never exceed their count
/// 7. Deleting can only lower totals, so it is never validated
