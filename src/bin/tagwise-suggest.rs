use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tagwise::{
    config::Config,
    suggester::Suggester,
    taxonomy::{CarModelTable, TagHierarchy},
    ZeroShotClassifier,
};

#[derive(Parser)]
#[command(name = "tagwise-suggest")]
#[command(about = "Suggest tags for a template or asset from a description")]
#[command(version)]
struct Cli {
    /// Free-text description of the template or asset
    #[arg(value_name = "DESCRIPTION")]
    description: String,

    /// Suggest asset (image) tags instead of template tags
    #[arg(long)]
    asset: bool,

    /// Classifier API key (overrides config and env)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    let taxonomy = TagHierarchy::from_file(&config.taxonomy.hierarchy_path)?;
    let car_models = CarModelTable::from_file(&config.taxonomy.car_models_path)?;

    let api_key = cli
        .api_key
        .or_else(|| config.classifier_api_key())
        .context("HUGGINGFACE_API_KEY not found in config or environment variables")?;

    let classifier = ZeroShotClassifier::from_config(&config.classifier, api_key)?;
    let engine = Suggester::new(taxonomy, car_models).with_classifier(Arc::new(classifier));

    let response = if cli.asset {
        engine.suggest_asset_tags(&cli.description)
    } else {
        engine.suggest_tags(&cli.description).await
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
