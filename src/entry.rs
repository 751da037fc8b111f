use crate::error::{AdvisorError, Result};
use crate::models::{parse_field, SoilProfile, SoilType};
use dialoguer::console::Term;
use dialoguer::{Input, Select};

struct NumericField {
    label: &'static str,
    unit: &'static str,
    get: fn(&SoilProfile) -> f64,
    set: fn(&mut SoilProfile, f64),
}

const NUMERIC_FIELDS: [NumericField; 9] = [
    NumericField {
        label: "pH Level",
        unit: "",
        get: |p| p.ph,
        set: |p, v| p.ph = v,
    },
    NumericField {
        label: "Electrical Conductivity (EC)",
        unit: "dS/m",
        get: |p| p.electrical_conductivity,
        set: |p, v| p.electrical_conductivity = v,
    },
    NumericField {
        label: "Organic Carbon (OC)",
        unit: "%",
        get: |p| p.organic_carbon,
        set: |p, v| p.organic_carbon = v,
    },
    NumericField {
        label: "Nitrogen (N)",
        unit: "kg/ha",
        get: |p| p.nitrogen,
        set: |p, v| p.nitrogen = v,
    },
    NumericField {
        label: "Phosphorus (P)",
        unit: "kg/ha",
        get: |p| p.phosphorus,
        set: |p, v| p.phosphorus = v,
    },
    NumericField {
        label: "Potassium (K)",
        unit: "kg/ha",
        get: |p| p.potassium,
        set: |p, v| p.potassium = v,
    },
    NumericField {
        label: "Calcium (Ca)",
        unit: "ppm",
        get: |p| p.calcium,
        set: |p, v| p.calcium = v,
    },
    NumericField {
        label: "Magnesium (Mg)",
        unit: "ppm",
        get: |p| p.magnesium,
        set: |p, v| p.magnesium = v,
    },
    NumericField {
        label: "Sulphur (S)",
        unit: "ppm",
        get: |p| p.sulphur,
        set: |p, v| p.sulphur = v,
    },
];

fn input_error(e: dialoguer::Error) -> AdvisorError {
    AdvisorError::Config(format!("Input error: {}", e))
}

/// Soil type choices: the known classes, plus the seed label if it is not
/// one of them. Returns the choices and the index of the seed.
fn soil_type_choices(current: &str) -> (Vec<String>, usize) {
    let mut choices: Vec<String> = SoilType::all()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();

    let index = match choices.iter().position(|c| c == current) {
        Some(i) => i,
        None => {
            choices.push(current.to_string());
            choices.len() - 1
        }
    };
    (choices, index)
}

/// The form talks on stderr; stdout carries only the report.
fn form_term() -> Term {
    Term::stderr()
}

/// Prompt for every soil measurement, seeded with `seed`.
///
/// Blank or unparsable numeric answers keep the seeded value.
pub fn prompt_profile(seed: &SoilProfile) -> Result<SoilProfile> {
    prompt_profile_on(&form_term(), seed)
}

fn prompt_profile_on(term: &Term, seed: &SoilProfile) -> Result<SoilProfile> {
    let mut profile = seed.clone();

    term.write_line("")?;
    term.write_line("Soil Test Results (press Enter to keep the default)")?;

    for field in &NUMERIC_FIELDS {
        let current = (field.get)(&profile);
        let prompt = if field.unit.is_empty() {
            format!("  {}", field.label)
        } else {
            format!("  {} ({})", field.label, field.unit)
        };

        let answer: String = Input::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .allow_empty(true)
            .interact_text_on(term)
            .map_err(input_error)?;

        let accepted = answer.trim().parse::<f64>().is_ok_and(f64::is_finite);
        if !accepted && !answer.trim().is_empty() {
            tracing::warn!("Invalid entry {:?} for {}, keeping {}", answer, field.label, current);
        }
        (field.set)(&mut profile, parse_field(&answer, current));
    }

    let (choices, default_index) = soil_type_choices(&profile.soil_type);
    let selected = Select::new()
        .with_prompt("  Soil Type")
        .items(&choices)
        .default(default_index)
        .interact_on(term)
        .map_err(input_error)?;
    profile.soil_type = choices[selected].clone();

    term.write_line("")?;
    Ok(profile)
}
