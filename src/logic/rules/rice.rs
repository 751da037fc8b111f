use super::{always, within, CropRule, Tier};
use crate::models::{status, SoilProfile};

/// Rice suitability
///
/// Tolerates slightly acidic soils. Potassium of at least 30 supports grain
/// filling. The bottom tier is labelled "Poor", not "Less Suggested".
pub struct RiceRule;

fn suitable_with_potash(p: &SoilProfile) -> bool {
    within(p.ph, 5.5, 7.5) && p.potassium >= 30.0
}

fn acceptable_ph(p: &SoilProfile) -> bool {
    within(p.ph, 5.0, 8.0)
}

static TIERS: [Tier; 3] = [
    Tier {
        condition: "pH 5.5–7.5 and potassium ≥ 30",
        predicate: suitable_with_potash,
        status: status::EXCELLENT,
        yield_estimate: "3–6 tons/hectare",
        duration_estimate: "100–130 days",
        reasons: &[
            "Slightly acidic to neutral pH suitable",
            "Potassium supports grain filling",
            "Loamy/clay soil retains water well",
        ],
        tips: &[
            "Maintain standing water during vegetative stage",
            "Apply organic manure before transplanting",
        ],
    },
    Tier {
        condition: "pH 5.0–8.0",
        predicate: acceptable_ph,
        status: status::BEST,
        yield_estimate: "2–4 tons/hectare",
        duration_estimate: "100–130 days",
        reasons: &[
            "pH acceptable but not ideal",
            "Fertility moderate",
            "Irrigation management needed",
        ],
        tips: &["Add potash fertilizer", "Ensure irrigation channels"],
    },
    Tier {
        condition: "otherwise",
        predicate: always,
        status: status::POOR,
        yield_estimate: "1–2 tons/hectare",
        duration_estimate: "100–130 days",
        reasons: &[
            "pH unsuitable for rice roots",
            "Soil drainage not ideal",
            "Fertility below requirement",
        ],
        tips: &["Not recommended unless improved with fertilizers"],
    },
];

impl CropRule for RiceRule {
    fn id(&self) -> &'static str {
        "rice"
    }

    fn name(&self) -> &'static str {
        "Rice"
    }

    fn tiers(&self) -> &'static [Tier] {
        &TIERS
    }
}
