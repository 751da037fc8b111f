use crate::error::Result;
use crate::models::{SoilProfile, SoilProfileDraft};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropadvisor",
    version,
    about = "Crop recommendations from soil test results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend crops for a soil profile (default)
    Recommend(RecommendArgs),
    /// Enter soil test results interactively, then recommend
    Enter(OutputArgs),
    /// List crop rules and their tiers in evaluation order
    Crops,
    /// List recognized soil types
    SoilTypes,
    /// Write a config file with default soil values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Soil measurements supplied on the command line
#[derive(Args, Debug, Default)]
pub struct SoilArgs {
    /// Soil pH
    #[arg(long)]
    pub ph: Option<f64>,

    /// Nitrogen (ppm or kg/ha)
    #[arg(long, short = 'n')]
    pub nitrogen: Option<f64>,

    /// Phosphorus (ppm or kg/ha)
    #[arg(long, short = 'p')]
    pub phosphorus: Option<f64>,

    /// Potassium (ppm or kg/ha)
    #[arg(long, short = 'k')]
    pub potassium: Option<f64>,

    /// Organic carbon (%)
    #[arg(long, visible_alias = "oc")]
    pub organic_carbon: Option<f64>,

    /// Soil type, e.g. "Black Soil"
    #[arg(long, short = 's')]
    pub soil_type: Option<String>,

    /// Electrical conductivity (dS/m)
    #[arg(long, visible_alias = "ec")]
    pub electrical_conductivity: Option<f64>,

    /// Calcium (ppm)
    #[arg(long)]
    pub calcium: Option<f64>,

    /// Magnesium (ppm)
    #[arg(long)]
    pub magnesium: Option<f64>,

    /// Sulphur (ppm)
    #[arg(long)]
    pub sulphur: Option<f64>,
}

impl SoilArgs {
    pub fn to_draft(&self) -> SoilProfileDraft {
        SoilProfileDraft {
            ph: self.ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            organic_carbon: self.organic_carbon,
            soil_type: self.soil_type.clone(),
            electrical_conductivity: self.electrical_conductivity,
            calcium: self.calcium,
            magnesium: self.magnesium,
            sulphur: self.sulphur,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the configured one)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable coloured status badges
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug, Default)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub soil: SoilArgs,

    /// Read soil values from a YAML or JSON file
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Require every soil value to be supplied instead of using defaults
    #[arg(long)]
    pub no_defaults: bool,

    /// Only evaluate this crop (id from `cropadvisor crops`)
    #[arg(long)]
    pub crop: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl RecommendArgs {
    /// Build the profile to evaluate. Precedence: defaults < file < flags.
    pub fn resolve_profile(&self, defaults: &SoilProfile) -> Result<SoilProfile> {
        let mut draft = SoilProfileDraft::default();
        if let Some(path) = &self.profile {
            tracing::debug!("Reading soil profile from {:?}", path);
            draft = draft.merge(&SoilProfileDraft::from_file(path)?);
        }
        let draft = draft.merge(&self.soil.to_draft());

        if self.no_defaults {
            return draft.into_profile();
        }

        let profile = draft.with_defaults(defaults);
        profile.validate()?;
        Ok(profile)
    }
}
