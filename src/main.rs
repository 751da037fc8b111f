mod cli;
mod config;
mod entry;
mod error;
mod logic;
mod models;
mod output;

use clap::Parser;
use cli::{Cli, Commands, OutputArgs, RecommendArgs};
use config::Config;
use logic::RecommendationEngine;
use models::{Report, SoilProfile, SoilProfileDraft, SoilType};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging on stderr so structured output stays clean
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Recommend(RecommendArgs::default()));

    match command {
        Commands::Init { force } => {
            let profile = entry::prompt_profile(&SoilProfile::default())?;
            let config = Config {
                defaults: SoilProfileDraft::from(&profile),
                ..Config::default()
            };
            let path = match cli.config {
                Some(p) => p,
                None => Config::default_config_path()?,
            };
            config.write(&path, force)?;
            println!("Configuration saved to {}", path.display());
        }
        Commands::Recommend(args) => {
            let config = Config::load(cli.config.as_deref())?;
            let profile = args.resolve_profile(&config.default_profile())?;
            recommend(&config, profile, args.crop.as_deref(), &args.output)?;
        }
        Commands::Enter(output) => {
            let config = Config::load(cli.config.as_deref())?;
            let profile = entry::prompt_profile(&config.default_profile())?;
            recommend(&config, profile, None, &output)?;
        }
        Commands::Crops => {
            let engine = RecommendationEngine::new();
            println!("{}", output::render_crop_rules(engine.crops()));
        }
        Commands::SoilTypes => {
            for soil_type in SoilType::all() {
                println!("{}", soil_type);
            }
        }
    }

    Ok(())
}

fn recommend(
    config: &Config,
    profile: SoilProfile,
    crop: Option<&str>,
    args: &OutputArgs,
) -> anyhow::Result<()> {
    if profile.recognized_soil_type().is_none() {
        tracing::info!(
            "Soil type {:?} is not a recognized soil class",
            profile.soil_type
        );
    }

    let engine = RecommendationEngine::new();
    let recommendations = engine.evaluate_selection(&profile, crop)?;
    tracing::debug!(
        "{} of {} crops recommended",
        recommendations.len(),
        engine.list_crops().len()
    );

    let format = args.format.unwrap_or(config.output.format);
    let color = config.output.color && !args.no_color && std::io::stdout().is_terminal();
    let report = Report::new(profile, recommendations);
    println!("{}", output::render_report(&report, format, color)?);
    Ok(())
}
