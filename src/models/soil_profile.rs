use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    SandyLoam,
    ClayLoam,
    Alluvial,
    BlackSoil,
    RedSoil,
    Laterite,
    Arid,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::SandyLoam => "Sandy Loam",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::Alluvial => "Alluvial",
            SoilType::BlackSoil => "Black Soil",
            SoilType::RedSoil => "Red Soil",
            SoilType::Laterite => "Laterite",
            SoilType::Arid => "Arid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "sandy" => Some(SoilType::Sandy),
            "loamy" => Some(SoilType::Loamy),
            "clay" => Some(SoilType::Clay),
            "sandyloam" => Some(SoilType::SandyLoam),
            "clayloam" => Some(SoilType::ClayLoam),
            "alluvial" => Some(SoilType::Alluvial),
            "blacksoil" => Some(SoilType::BlackSoil),
            "redsoil" => Some(SoilType::RedSoil),
            "laterite" => Some(SoilType::Laterite),
            "arid" => Some(SoilType::Arid),
            _ => None,
        }
    }

    pub fn all() -> &'static [SoilType] {
        &[
            SoilType::Sandy,
            SoilType::Loamy,
            SoilType::Clay,
            SoilType::SandyLoam,
            SoilType::ClayLoam,
            SoilType::Alluvial,
            SoilType::BlackSoil,
            SoilType::RedSoil,
            SoilType::Laterite,
            SoilType::Arid,
        ]
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Measured chemistry of a single soil sample.
///
/// `soil_type` is kept as the raw label the caller supplied. Values outside
/// [`SoilType`] are legal; they simply never satisfy a soil-type condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilProfile {
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_carbon: f64,
    pub soil_type: String,
    pub electrical_conductivity: f64,
    pub calcium: f64,
    pub magnesium: f64,
    pub sulphur: f64,
}

impl SoilProfile {
    fn numeric_fields(&self) -> [(&'static str, f64); 9] {
        [
            ("ph", self.ph),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("organicCarbon", self.organic_carbon),
            ("electricalConductivity", self.electrical_conductivity),
            ("calcium", self.calcium),
            ("magnesium", self.magnesium),
            ("sulphur", self.sulphur),
        ]
    }

    /// Rejects NaN and infinite measurements. Range is not checked.
    pub fn validate(&self) -> Result<()> {
        match self.numeric_fields().iter().find(|(_, v)| !v.is_finite()) {
            Some((name, value)) => Err(AdvisorError::InvalidProfile(format!(
                "{} must be a finite number, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }

    pub fn recognized_soil_type(&self) -> Option<SoilType> {
        SoilType::from_str(&self.soil_type)
    }
}

impl Default for SoilProfile {
    fn default() -> Self {
        Self {
            ph: 7.0,
            nitrogen: 50.0,
            phosphorus: 30.0,
            potassium: 40.0,
            organic_carbon: 0.7,
            soil_type: "Loam".to_string(),
            electrical_conductivity: 1.0,
            calcium: 1000.0,
            magnesium: 200.0,
            sulphur: 10.0,
        }
    }
}

/// A partially supplied soil profile, as read from a file, flags or config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilProfileDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nitrogen: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    #[serde(
        default,
        alias = "organic_carbon",
        alias = "oc",
        skip_serializing_if = "Option::is_none"
    )]
    pub organic_carbon: Option<f64>,
    #[serde(
        default,
        alias = "soil_type",
        deserialize_with = "deserialize_soil_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub soil_type: Option<String>,
    #[serde(
        default,
        alias = "electrical_conductivity",
        alias = "ec",
        skip_serializing_if = "Option::is_none"
    )]
    pub electrical_conductivity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnesium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sulphur: Option<f64>,
}

/// Accept only a string. YAML would otherwise coerce plain scalars such as
/// `42` or `true` into labels; an explicit null is rejected too.
fn deserialize_soil_type<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct SoilTypeVisitor;

    impl<'de> serde::de::Visitor<'de> for SoilTypeVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a soil type string")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: serde::de::Error>(self, v: String) -> std::result::Result<String, E> {
            Ok(v)
        }
    }

    deserializer.deserialize_any(SoilTypeVisitor).map(Some)
}

impl SoilProfileDraft {
    /// Read a draft from a YAML or JSON file (chosen by extension).
    ///
    /// A malformed document, including a soil type that is not a string,
    /// is reported as an invalid profile.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let parsed: std::result::Result<Self, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|e| {
            AdvisorError::InvalidProfile(format!("{}: {}", path.display(), e))
        })
    }

    /// Overlay every field set in `other` on top of `self`.
    pub fn merge(self, other: &SoilProfileDraft) -> Self {
        Self {
            ph: other.ph.or(self.ph),
            nitrogen: other.nitrogen.or(self.nitrogen),
            phosphorus: other.phosphorus.or(self.phosphorus),
            potassium: other.potassium.or(self.potassium),
            organic_carbon: other.organic_carbon.or(self.organic_carbon),
            soil_type: other.soil_type.clone().or(self.soil_type),
            electrical_conductivity: other
                .electrical_conductivity
                .or(self.electrical_conductivity),
            calcium: other.calcium.or(self.calcium),
            magnesium: other.magnesium.or(self.magnesium),
            sulphur: other.sulphur.or(self.sulphur),
        }
    }

    /// Fill every missing field from `defaults`.
    pub fn with_defaults(self, defaults: &SoilProfile) -> SoilProfile {
        SoilProfile {
            ph: self.ph.unwrap_or(defaults.ph),
            nitrogen: self.nitrogen.unwrap_or(defaults.nitrogen),
            phosphorus: self.phosphorus.unwrap_or(defaults.phosphorus),
            potassium: self.potassium.unwrap_or(defaults.potassium),
            organic_carbon: self.organic_carbon.unwrap_or(defaults.organic_carbon),
            soil_type: self
                .soil_type
                .unwrap_or_else(|| defaults.soil_type.clone()),
            electrical_conductivity: self
                .electrical_conductivity
                .unwrap_or(defaults.electrical_conductivity),
            calcium: self.calcium.unwrap_or(defaults.calcium),
            magnesium: self.magnesium.unwrap_or(defaults.magnesium),
            sulphur: self.sulphur.unwrap_or(defaults.sulphur),
        }
    }

    /// Strict conversion: every field must be present and finite.
    pub fn into_profile(self) -> Result<SoilProfile> {
        fn required<T>(value: Option<T>, name: &str) -> Result<T> {
            value.ok_or_else(|| AdvisorError::InvalidProfile(format!("missing field {}", name)))
        }

        let profile = SoilProfile {
            ph: required(self.ph, "ph")?,
            nitrogen: required(self.nitrogen, "nitrogen")?,
            phosphorus: required(self.phosphorus, "phosphorus")?,
            potassium: required(self.potassium, "potassium")?,
            organic_carbon: required(self.organic_carbon, "organicCarbon")?,
            soil_type: required(self.soil_type, "soilType")?,
            electrical_conductivity: required(
                self.electrical_conductivity,
                "electricalConductivity",
            )?,
            calcium: required(self.calcium, "calcium")?,
            magnesium: required(self.magnesium, "magnesium")?,
            sulphur: required(self.sulphur, "sulphur")?,
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl From<&SoilProfile> for SoilProfileDraft {
    fn from(profile: &SoilProfile) -> Self {
        Self {
            ph: Some(profile.ph),
            nitrogen: Some(profile.nitrogen),
            phosphorus: Some(profile.phosphorus),
            potassium: Some(profile.potassium),
            organic_carbon: Some(profile.organic_carbon),
            soil_type: Some(profile.soil_type.clone()),
            electrical_conductivity: Some(profile.electrical_conductivity),
            calcium: Some(profile.calcium),
            magnesium: Some(profile.magnesium),
            sulphur: Some(profile.sulphur),
        }
    }
}

/// Parse a numeric form entry, falling back to `default` when the text is
/// empty, unparsable or not finite.
pub fn parse_field(text: &str, default: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn soil_type_from_str_valid() {
        assert_eq!(SoilType::from_str("Black Soil"), Some(SoilType::BlackSoil));
        assert_eq!(SoilType::from_str("blacksoil"), Some(SoilType::BlackSoil));
        assert_eq!(SoilType::from_str("SANDY LOAM"), Some(SoilType::SandyLoam));
        assert_eq!(SoilType::from_str("clay-loam"), Some(SoilType::ClayLoam));
        assert_eq!(SoilType::from_str("Arid"), Some(SoilType::Arid));
    }

    #[test]
    fn soil_type_from_str_rejects_labels_outside_the_set() {
        // Both appear in the rule tables or defaults but are not soil classes
        assert_eq!(SoilType::from_str("Loam"), None);
        assert_eq!(SoilType::from_str("Black"), None);
        assert_eq!(SoilType::from_str(""), None);
    }

    #[test]
    fn soil_type_labels_round_trip() {
        assert_eq!(SoilType::all().len(), 10);
        for soil_type in SoilType::all() {
            assert_eq!(
                SoilType::from_str(soil_type.as_str()),
                Some(*soil_type),
                "Round-trip failed for {:?}",
                soil_type
            );
        }
    }

    #[test]
    fn default_profile_matches_reference_values() {
        let p = SoilProfile::default();
        assert_eq!(p.ph, 7.0);
        assert_eq!(p.nitrogen, 50.0);
        assert_eq!(p.phosphorus, 30.0);
        assert_eq!(p.potassium, 40.0);
        assert_eq!(p.organic_carbon, 0.7);
        assert_eq!(p.soil_type, "Loam");
        assert!(p.validate().is_ok());
        assert!(p.recognized_soil_type().is_none());
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let mut p = SoilProfile::default();
        p.ph = f64::NAN;
        let err = p.validate().unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidProfile(ref m) if m.contains("ph")));

        let mut p = SoilProfile::default();
        p.sulphur = f64::INFINITY;
        assert!(matches!(
            p.validate(),
            Err(AdvisorError::InvalidProfile(ref m)) if m.contains("sulphur")
        ));

        let mut p = SoilProfile::default();
        p.potassium = f64::NEG_INFINITY;
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_accepts_out_of_range_values() {
        let mut p = SoilProfile::default();
        p.ph = 14.5;
        p.nitrogen = -3.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn parse_field_falls_back_on_bad_input() {
        assert_eq!(parse_field("6.8", 7.0), 6.8);
        assert_eq!(parse_field("  42 ", 0.0), 42.0);
        assert_eq!(parse_field("", 7.0), 7.0);
        assert_eq!(parse_field("abc", 50.0), 50.0);
        assert_eq!(parse_field("NaN", 7.0), 7.0);
        assert_eq!(parse_field("inf", 7.0), 7.0);
    }

    #[test]
    fn draft_merge_prefers_overlay() {
        let base = SoilProfileDraft {
            ph: Some(6.0),
            nitrogen: Some(40.0),
            ..Default::default()
        };
        let overlay = SoilProfileDraft {
            ph: Some(8.2),
            soil_type: Some("Arid".into()),
            ..Default::default()
        };
        let merged = base.merge(&overlay);
        assert_eq!(merged.ph, Some(8.2));
        assert_eq!(merged.nitrogen, Some(40.0));
        assert_eq!(merged.soil_type.as_deref(), Some("Arid"));
        assert_eq!(merged.potassium, None);
    }

    #[test]
    fn draft_with_defaults_fills_gaps() {
        let draft = SoilProfileDraft {
            ph: Some(8.5),
            ..Default::default()
        };
        let profile = draft.with_defaults(&SoilProfile::default());
        assert_eq!(profile.ph, 8.5);
        assert_eq!(profile.potassium, 40.0);
        assert_eq!(profile.soil_type, "Loam");
    }

    #[test]
    fn draft_into_profile_requires_every_field() {
        let mut draft = SoilProfileDraft::from(&SoilProfile::default());
        assert!(draft.clone().into_profile().is_ok());

        draft.calcium = None;
        let err = draft.into_profile().unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidProfile(ref m) if m.contains("calcium")));
    }

    #[test]
    fn draft_into_profile_rejects_nan() {
        let mut draft = SoilProfileDraft::from(&SoilProfile::default());
        draft.ph = Some(f64::NAN);
        assert!(matches!(
            draft.into_profile(),
            Err(AdvisorError::InvalidProfile(_))
        ));
    }

    #[test]
    fn draft_accepts_form_aliases() {
        let yaml = "ph: 6.2\noc: 0.5\nec: 1.2\nsoil_type: Red Soil\n";
        let draft: SoilProfileDraft = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(draft.organic_carbon, Some(0.5));
        assert_eq!(draft.electrical_conductivity, Some(1.2));
        assert_eq!(draft.soil_type.as_deref(), Some("Red Soil"));
    }

    #[test]
    fn draft_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"ph": 7.8, "potassium": 35, "soilType": "Black Soil", "organicCarbon": 0.9}}"#
        )
        .unwrap();

        let draft = SoilProfileDraft::from_file(file.path()).unwrap();
        assert_eq!(draft.ph, Some(7.8));
        assert_eq!(draft.potassium, Some(35.0));
        assert_eq!(draft.organic_carbon, Some(0.9));
        assert_eq!(draft.soil_type.as_deref(), Some("Black Soil"));
    }

    #[test]
    fn draft_from_file_rejects_non_string_soil_type() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"ph": 7.0, "soilType": 42}}"#).unwrap();

        let err = SoilProfileDraft::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidProfile(_)));
    }

    fn yaml_draft(content: &str) -> Result<SoilProfileDraft> {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        SoilProfileDraft::from_file(file.path())
    }

    #[test]
    fn yaml_draft_rejects_non_string_soil_type() {
        for content in ["ph: 7.0\nsoilType: 42\n", "ph: 7.0\nsoilType: true\n", "soilType: 7.5\n"] {
            assert!(
                matches!(yaml_draft(content), Err(AdvisorError::InvalidProfile(_))),
                "accepted {:?}",
                content
            );
        }
    }

    #[test]
    fn yaml_draft_accepts_quoted_numeric_label() {
        let draft = yaml_draft("soilType: \"42\"\n").unwrap();
        assert_eq!(draft.soil_type.as_deref(), Some("42"));
    }

    #[test]
    fn explicit_null_soil_type_is_rejected() {
        assert!(matches!(
            yaml_draft("ph: 7.0\nsoilType: ~\n"),
            Err(AdvisorError::InvalidProfile(_))
        ));

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"ph": 7.0, "soilType": null}}"#).unwrap();
        assert!(matches!(
            SoilProfileDraft::from_file(file.path()),
            Err(AdvisorError::InvalidProfile(_))
        ));
    }

    #[test]
    fn absent_soil_type_stays_unset() {
        let draft = yaml_draft("ph: 6.1\n").unwrap();
        assert_eq!(draft.soil_type, None);
    }

    #[test]
    fn draft_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SoilProfileDraft::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, AdvisorError::Io(_)));
    }
}
