use super::{always, within, CropRule, Tier};
use crate::models::{status, SoilProfile};

/// Wheat suitability
///
/// Wheat wants a near-neutral soil. The top tier additionally needs
/// nitrogen of at least 60 for good protein content.
pub struct WheatRule;

fn neutral_and_rich(p: &SoilProfile) -> bool {
    within(p.ph, 6.5, 7.0) && p.nitrogen >= 60.0
}

fn moderate_ph(p: &SoilProfile) -> bool {
    within(p.ph, 6.0, 7.5)
}

static TIERS: [Tier; 3] = [
    Tier {
        condition: "pH 6.5–7.0 and nitrogen ≥ 60",
        predicate: neutral_and_rich,
        status: status::EXCELLENT,
        yield_estimate: "4–7 tons/hectare",
        duration_estimate: "120–150 days",
        reasons: &[
            "Neutral pH {ph} is perfect for wheat",
            "High nitrogen ensures strong protein content",
            "Alluvial/loamy soil improves productivity",
        ],
        tips: &[
            "Plant in Rabi season (Oct–Dec)",
            "Irrigate at crown root and heading stages",
        ],
    },
    Tier {
        condition: "pH 6.0–7.5",
        predicate: moderate_ph,
        status: status::BEST,
        yield_estimate: "3–6 tons/hectare",
        duration_estimate: "120–150 days",
        reasons: &[
            "pH moderately suitable",
            "Nitrogen levels acceptable with fertilizers",
            "Adaptable to loam and clay soils",
        ],
        tips: &["Apply urea in split doses", "Avoid waterlogging"],
    },
    Tier {
        condition: "otherwise",
        predicate: always,
        status: status::LESS_SUGGESTED,
        yield_estimate: "2–4 tons/hectare",
        duration_estimate: "120–150 days",
        reasons: &[
            "pH outside optimal range",
            "Nitrogen below requirement",
            "Low soil fertility for high yield",
        ],
        tips: &["Use fertilizers", "Add organic manure"],
    },
];

impl CropRule for WheatRule {
    fn id(&self) -> &'static str {
        "wheat"
    }

    fn name(&self) -> &'static str {
        "Wheat"
    }

    fn tiers(&self) -> &'static [Tier] {
        &TIERS
    }
}
