use anyhow::Result;
use clap::Parser;
use tagwise::{config::Config, taxonomy::TagHierarchy};

#[derive(Parser)]
#[command(name = "tagwise-tags")]
#[command(about = "Print the tag hierarchy")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    let taxonomy = TagHierarchy::from_file(&config.taxonomy.hierarchy_path)?;
    println!("{}", serde_json::to_string_pretty(taxonomy.root())?);

    Ok(())
}
