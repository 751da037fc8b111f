use super::{always, within, CropRule, Tier};
use crate::models::{status, SoilProfile};

/// Soil type the top cotton tier requires. Compared verbatim against the
/// profile label; "Black Soil" from the soil class list does not match.
pub const BLACK_SOIL_LABEL: &str = "Black";

/// Cotton suitability
///
/// Prefers slightly alkaline, moisture-retentive black soils.
pub struct CottonRule;

fn alkaline_black_soil(p: &SoilProfile) -> bool {
    within(p.ph, 7.5, 8.0) && p.soil_type == BLACK_SOIL_LABEL
}

fn tolerable_ph(p: &SoilProfile) -> bool {
    within(p.ph, 7.0, 8.5)
}

static TIERS: [Tier; 3] = [
    Tier {
        condition: "pH 7.5–8.0 and soil type \"Black\"",
        predicate: alkaline_black_soil,
        status: status::EXCELLENT,
        yield_estimate: "2–3 tons/hectare",
        duration_estimate: "150–180 days",
        reasons: &[
            "Black soil retains moisture",
            "Slightly alkaline pH supports cotton roots",
            "NPK balance adequate",
        ],
        tips: &[
            "Sow in June–July",
            "Use Bt-cotton varieties for pest resistance",
        ],
    },
    Tier {
        condition: "pH 7.0–8.5",
        predicate: tolerable_ph,
        status: status::BEST,
        yield_estimate: "1.5–2 tons/hectare",
        duration_estimate: "150–180 days",
        reasons: &[
            "Soil fertility manageable",
            "pH slightly alkaline but tolerable",
        ],
        tips: &["Add nitrogen fertilizer", "Use drip irrigation"],
    },
    Tier {
        condition: "otherwise",
        predicate: always,
        status: status::LESS_SUGGESTED,
        yield_estimate: "1–1.5 tons/hectare",
        duration_estimate: "150–180 days",
        reasons: &["Soil unsuitable for cotton", "Drainage issues likely"],
        tips: &["Not ideal – switch to pulses or bajra"],
    },
];

impl CropRule for CottonRule {
    fn id(&self) -> &'static str {
        "cotton"
    }

    fn name(&self) -> &'static str {
        "Cotton"
    }

    fn tiers(&self) -> &'static [Tier] {
        &TIERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(ph: f64, soil_type: &str) -> SoilProfile {
        SoilProfile {
            ph,
            soil_type: soil_type.to_string(),
            ..SoilProfile::default()
        }
    }

    #[test]
    fn black_label_reaches_top_tier() {
        let rec = CottonRule.evaluate(&profile(7.8, "Black")).unwrap();
        assert_eq!(rec.status, "Excellent");
        assert_eq!(rec.reasons[0], "Black soil retains moisture");
    }

    #[test]
    fn soil_type_gates_top_tier() {
        let rec = CottonRule.evaluate(&profile(7.8, "Loamy")).unwrap();
        assert_eq!(rec.status, "Best");
    }

    // Open question: the soil class list spells this "Black Soil", so a
    // profile built from that list can never reach the top tier.
    #[test]
    fn black_soil_class_label_does_not_match_top_tier() {
        let rec = CottonRule.evaluate(&profile(7.8, "Black Soil")).unwrap();
        assert_eq!(rec.status, "Best");
    }

    #[test]
    fn soil_type_comparison_is_case_sensitive() {
        let rec = CottonRule.evaluate(&profile(7.5, "black")).unwrap();
        assert_eq!(rec.status, "Best");
    }

    #[test]
    fn fallback_is_less_suggested() {
        for ph in [6.99, 8.51] {
            let rec = CottonRule.evaluate(&profile(ph, "Black")).unwrap();
            assert_eq!(rec.status, "Less Suggested", "pH {}", ph);
            assert_eq!(rec.yield_estimate, "1–1.5 tons/hectare");
        }
    }
}
