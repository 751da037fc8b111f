pub mod bajra;
pub mod cotton;
pub mod engine;
pub mod rice;
pub mod wheat;

pub use engine::RecommendationEngine;

use crate::models::{CropRecommendation, SoilProfile};

pub type Predicate = fn(&SoilProfile) -> bool;

/// One suitability classification within a crop's rule set.
///
/// Reasons and tips may contain `{ph}`, `{nitrogen}`, `{phosphorus}`,
/// `{potassium}`, `{organic_carbon}` or `{soil_type}` placeholders, which are
/// filled with the profile's raw values.
pub struct Tier {
    /// Human-readable form of `predicate`, shown by `cropadvisor crops`
    pub condition: &'static str,
    pub predicate: Predicate,
    pub status: &'static str,
    pub yield_estimate: &'static str,
    pub duration_estimate: &'static str,
    pub reasons: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl Tier {
    pub fn matches(&self, profile: &SoilProfile) -> bool {
        (self.predicate)(profile)
    }

    pub fn recommend(&self, crop_name: &str, profile: &SoilProfile) -> CropRecommendation {
        let rec = CropRecommendation::new(
            crop_name,
            self.status,
            self.yield_estimate,
            self.duration_estimate,
        );
        let rec = self
            .reasons
            .iter()
            .fold(rec, |rec, r| rec.with_reason(render(r, profile)));
        self.tips
            .iter()
            .fold(rec, |rec, t| rec.with_tip(render(t, profile)))
    }
}

/// Trait for per-crop suitability rules
pub trait CropRule: Send + Sync {
    /// Unique identifier for this crop
    fn id(&self) -> &'static str;

    /// Display name used in recommendations
    fn name(&self) -> &'static str;

    /// Tiers in evaluation order
    fn tiers(&self) -> &'static [Tier];

    /// Classify the profile with the first tier whose predicate holds.
    /// Returns `None` when no tier matches.
    fn evaluate(&self, profile: &SoilProfile) -> Option<CropRecommendation> {
        self.tiers()
            .iter()
            .find(|tier| tier.matches(profile))
            .map(|tier| tier.recommend(self.name(), profile))
    }
}

/// Inclusive range check used by the tier predicates.
pub fn within(value: f64, low: f64, high: f64) -> bool {
    value >= low && value <= high
}

/// Catch-all predicate for a crop's final tier.
pub fn always(_: &SoilProfile) -> bool {
    true
}

fn render(template: &str, profile: &SoilProfile) -> String {
    if !template.contains('{') {
        return template.to_string();
    }
    template
        .replace("{ph}", &profile.ph.to_string())
        .replace("{nitrogen}", &profile.nitrogen.to_string())
        .replace("{phosphorus}", &profile.phosphorus.to_string())
        .replace("{potassium}", &profile.potassium.to_string())
        .replace("{organic_carbon}", &profile.organic_carbon.to_string())
        .replace("{soil_type}", &profile.soil_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status;

    fn acidic(p: &SoilProfile) -> bool {
        p.ph < 6.0
    }

    fn low_nitrogen(p: &SoilProfile) -> bool {
        p.nitrogen < 60.0
    }

    static OVERLAPPING: [Tier; 2] = [
        Tier {
            condition: "pH < 6",
            predicate: acidic,
            status: status::EXCELLENT,
            yield_estimate: "1 t",
            duration_estimate: "1 day",
            reasons: &["acidic at {ph}"],
            tips: &[],
        },
        Tier {
            condition: "N < 60",
            predicate: low_nitrogen,
            status: status::POOR,
            yield_estimate: "0 t",
            duration_estimate: "1 day",
            reasons: &["nitrogen {nitrogen} on {soil_type}"],
            tips: &["add urea"],
        },
    ];

    struct Probe;

    impl CropRule for Probe {
        fn id(&self) -> &'static str {
            "probe"
        }

        fn name(&self) -> &'static str {
            "Probe"
        }

        fn tiers(&self) -> &'static [Tier] {
            &OVERLAPPING
        }
    }

    #[test]
    fn within_is_inclusive() {
        assert!(within(6.5, 6.5, 7.0));
        assert!(within(7.0, 6.5, 7.0));
        assert!(!within(7.000001, 6.5, 7.0));
        assert!(!within(6.499999, 6.5, 7.0));
    }

    #[test]
    fn first_matching_tier_wins() {
        let mut p = SoilProfile::default();
        p.ph = 5.0;
        p.nitrogen = 10.0;
        // Both tiers hold; the first one is taken
        let rec = Probe.evaluate(&p).unwrap();
        assert_eq!(rec.status, status::EXCELLENT);
        assert_eq!(rec.reasons, vec!["acidic at 5"]);
    }

    #[test]
    fn later_tier_used_when_earlier_fails() {
        let mut p = SoilProfile::default();
        p.ph = 6.5;
        p.nitrogen = 12.5;
        let rec = Probe.evaluate(&p).unwrap();
        assert_eq!(rec.status, status::POOR);
        assert_eq!(rec.reasons, vec!["nitrogen 12.5 on Loam"]);
        assert_eq!(rec.tips, vec!["add urea"]);
    }

    #[test]
    fn no_matching_tier_yields_none() {
        let mut p = SoilProfile::default();
        p.ph = 7.0;
        p.nitrogen = 80.0;
        assert!(Probe.evaluate(&p).is_none());
    }

    #[test]
    fn render_uses_unrounded_values() {
        let mut p = SoilProfile::default();
        p.ph = 6.8123;
        assert_eq!(render("pH {ph}", &p), "pH 6.8123");
        p.ph = 7.0;
        assert_eq!(render("pH {ph}", &p), "pH 7");
        assert_eq!(render("no placeholders", &p), "no placeholders");
    }
}
