use anyhow::Result;
use clap::Parser;
use tagwise::filename;

#[derive(Parser)]
#[command(name = "tagwise-filename")]
#[command(about = "Suggest tags from a structured asset filename")]
#[command(version)]
struct Cli {
    /// Filename following the campaign naming convention
    #[arg(value_name = "FILENAME")]
    filename: String,

    /// Print the parsed fields instead of suggestions
    #[arg(long)]
    parsed: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.parsed {
        let parsed = filename::parse_filename(&cli.filename);
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        let response = filename::suggest_from_filename(&cli.filename);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
