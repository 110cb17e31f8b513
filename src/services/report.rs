// src/services/report.rs
//
// Markdown portfolio report - a read-only view over the collection

use std::fmt::Write;

use chrono::NaiveDate;

use crate::domain::{Activity, PortfolioConfig, PortfolioStats};

/// Characters of analysis quoted per activity
pub const ANALYSIS_EXCERPT_CHARS: usize = 200;

/// Render the Markdown report for `activities` as of `export_date`
pub fn render_report(
    activities: &[Activity],
    stats: &PortfolioStats,
    config: &PortfolioConfig,
    export_date: NaiveDate,
) -> String {
    let mut report = String::new();

    // Writing into a String cannot fail.
    let _ = write_report(&mut report, activities, stats, config, export_date);
    report
}

fn write_report(
    out: &mut String,
    activities: &[Activity],
    stats: &PortfolioStats,
    config: &PortfolioConfig,
    export_date: NaiveDate,
) -> std::fmt::Result {
    writeln!(out, "# Portfolio d'Activités - {}\n", config.owner.name)?;
    writeln!(out, "Date d'export: {}\n", export_date.format("%d/%m/%Y"))?;

    writeln!(out, "## Statistiques")?;
    writeln!(out, "- Total heures: {}/{}h", stats.total_hours, config.max_total_hours)?;
    writeln!(out, "- Nombre d'activités: {}", stats.total_activities)?;
    writeln!(out, "- Activités complétées: {}", stats.completed_activities)?;
    writeln!(out, "- Thèmes couverts: {}/{}\n", stats.total_themes, config.min_themes)?;

    writeln!(out, "## Répartition par thème")?;
    for (theme, hours) in stats.ordered_theme_hours(config) {
        writeln!(out, "- {}: {}h", theme, hours)?;
    }

    writeln!(out, "\n## Liste des activités\n")?;
    for activity in activities {
        writeln!(out, "### {}", activity.name)?;
        writeln!(out, "- **Thème**: {}", activity.theme)?;
        writeln!(out, "- **Type**: {}", config.type_label(&activity.activity_type))?;
        let date = activity
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        writeln!(out, "- **Date**: {}", date)?;
        writeln!(out, "- **Heures**: {}h", activity.hours)?;
        writeln!(out, "- **Statut**: {}", activity.status)?;
        writeln!(out, "- **Preuve**: {}", activity.proof)?;
        if !activity.analysis.is_empty() {
            writeln!(out, "- **Analyse**: {}...", analysis_excerpt(&activity.analysis))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// First `ANALYSIS_EXCERPT_CHARS` characters (not bytes) of the analysis
pub fn analysis_excerpt(analysis: &str) -> &str {
    match analysis.char_indices().nth(ANALYSIS_EXCERPT_CHARS) {
        Some((byte_idx, _)) => &analysis[..byte_idx],
        None => analysis,
    }
}

/// Suggested download name, e.g. `rapport_portfolio_2024-05-01.md`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("rapport_portfolio_{}.md", date.format("%Y-%m-%d"))
}
