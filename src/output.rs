use crate::error::Result;
use crate::logic::rules::CropRule;
use crate::models::{status, CropRecommendation, Report, SoilProfile};
use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

pub fn render_report(report: &Report, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}

/// Badge colour for a status label. Unknown labels stay unstyled.
pub fn status_color(label: &str) -> Option<Color> {
    match label {
        status::EXCELLENT => Some(Color::Green),
        status::BEST => Some(Color::DarkGreen),
        status::LESS_SUGGESTED => Some(Color::Yellow),
        status::POOR => Some(Color::Red),
        _ => None,
    }
}

fn badge(label: &str, color: bool) -> String {
    let text = format!("[{}]", label);
    match status_color(label) {
        Some(c) if color => text.with(c).bold().to_string(),
        _ => text,
    }
}

fn profile_summary(profile: &SoilProfile, lines: &mut Vec<String>) {
    lines.push("Your Soil Profile".to_string());
    lines.push(format!("  {:<12} {}", "pH Level", profile.ph));
    lines.push(format!("  {:<12} {} ppm", "Nitrogen", profile.nitrogen));
    lines.push(format!("  {:<12} {} ppm", "Phosphorus", profile.phosphorus));
    lines.push(format!("  {:<12} {} ppm", "Potassium", profile.potassium));
    lines.push(format!("  {:<12} {}", "Soil Type", profile.soil_type));
}

fn crop_card(rec: &CropRecommendation, color: bool, lines: &mut Vec<String>) {
    lines.push(format!("{}  {}", rec.name, badge(&rec.status, color)));
    lines.push(format!(
        "  Yield: {}   Duration: {}",
        rec.yield_estimate, rec.duration_estimate
    ));
    if !rec.reasons.is_empty() {
        lines.push("  Why this crop works:".to_string());
        lines.extend(rec.reasons.iter().map(|r| format!("    - {}", r)));
    }
    if !rec.tips.is_empty() {
        lines.push("  Planting Tips:".to_string());
        lines.extend(rec.tips.iter().map(|t| format!("    - {}", t)));
    }
}

pub fn render_table(report: &Report, color: bool) -> String {
    let mut lines = Vec::new();
    profile_summary(&report.profile, &mut lines);
    lines.push(String::new());
    lines.push("Crop Recommendations".to_string());

    if report.recommendations.is_empty() {
        lines.push("No crops are suited to this soil profile.".to_string());
    } else {
        lines.push("Based on your soil analysis, here are the most suitable crops".to_string());
        for rec in &report.recommendations {
            lines.push(String::new());
            crop_card(rec, color, &mut lines);
        }
    }

    lines.join("\n")
}

/// Rule listing for `cropadvisor crops`: each crop's tiers in evaluation order.
pub fn render_crop_rules<'a>(crops: impl Iterator<Item = &'a dyn CropRule>) -> String {
    let mut lines = Vec::new();
    for crop in crops {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", crop.name(), crop.id()));
        for (i, tier) in crop.tiers().iter().enumerate() {
            lines.push(format!(
                "  {}. {:<16} {:<36} {} / {}",
                i + 1,
                tier.status,
                tier.condition,
                tier.yield_estimate,
                tier.duration_estimate
            ));
        }
    }
    lines.join("\n")
}
