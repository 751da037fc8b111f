use super::SoilProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status labels used by the crop tables. Label sets are crop-specific:
/// Rice ends in [`POOR`], Wheat and Cotton in [`LESS_SUGGESTED`].
pub mod status {
    pub const EXCELLENT: &str = "Excellent";
    pub const BEST: &str = "Best";
    pub const LESS_SUGGESTED: &str = "Less Suggested";
    pub const POOR: &str = "Poor";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub name: String,
    pub yield_estimate: String,
    pub duration_estimate: String,
    pub status: String,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
}

impl CropRecommendation {
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        yield_estimate: impl Into<String>,
        duration_estimate: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            yield_estimate: yield_estimate.into(),
            duration_estimate: duration_estimate.into(),
            status: status.into(),
            reasons: Vec::new(),
            tips: Vec::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }
}

/// Serialized envelope around one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub profile: SoilProfile,
    pub recommendations: Vec<CropRecommendation>,
}

impl Report {
    pub fn new(profile: SoilProfile, recommendations: Vec<CropRecommendation>) -> Self {
        Self {
            generated_at: Utc::now(),
            profile,
            recommendations,
        }
    }
}
