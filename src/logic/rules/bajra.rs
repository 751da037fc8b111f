use super::{within, CropRule, Tier};
use crate::models::{status, SoilProfile};

/// Bajra (pearl millet) suitability
///
/// Only recommended on alkaline soils. There is no catch-all tier, so
/// outside pH 8–9 the crop is left out of the results entirely.
pub struct BajraRule;

fn alkaline(p: &SoilProfile) -> bool {
    within(p.ph, 8.0, 9.0)
}

static TIERS: [Tier; 1] = [Tier {
    condition: "pH 8.0–9.0",
    predicate: alkaline,
    status: status::EXCELLENT,
    yield_estimate: "1–2 tons/hectare",
    duration_estimate: "70–90 days",
    reasons: &[
        "Tolerates alkaline and desert soils",
        "Low fertilizer requirement",
        "Short duration crop",
    ],
    tips: &["Best for arid zones", "Sow with onset of monsoon"],
}];

impl CropRule for BajraRule {
    fn id(&self) -> &'static str {
        "bajra"
    }

    fn name(&self) -> &'static str {
        "Bajra (Pearl Millet)"
    }

    fn tiers(&self) -> &'static [Tier] {
        &TIERS
    }
}
