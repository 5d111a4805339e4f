//! cesta - categorize scraped supermarket product listings
//!
//! Reads a flat JSON listing of `{id, title, supermarket}` records,
//! clusters equivalent products, and writes the categorized listing back
//! as pretty-printed JSON. Also ships the bundled sample listing and a
//! merge tool for per-market listing files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cesta_core::{categorize_products, CategorizationConfig, Lexicon};

mod files;
mod sample;

use files::CliError;

#[derive(Parser)]
#[command(name = "cesta", version, about = "Categorize scraped supermarket product listings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cluster a product listing into categories of equivalent products
    Categorize {
        /// JSON listing of {id, title, supermarket} records
        input: PathBuf,
        /// Output path (default: <stem>_categorized.json next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Replacement brand/category lexicon as JSON
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// Write the bundled sample listing
    Sample {
        #[arg(short, long, default_value = "sample_products.json")]
        output: PathBuf,
    },
    /// Merge per-market listing files into one listing with fresh ids
    Combine {
        /// Listing files to merge, in order
        inputs: Vec<PathBuf>,
        #[arg(short, long, default_value = "combined_products.json")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "run failed");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Categorize {
            input,
            output,
            lexicon,
        } => {
            let config = match lexicon {
                Some(path) => {
                    let lexicon: Lexicon = files::load_json(&path)?;
                    CategorizationConfig::with_lexicon(lexicon)
                }
                None => CategorizationConfig::default(),
            };

            let products = files::load_listing(&input)?;
            tracing::info!(path = %input.display(), count = products.len(), "listing loaded");

            let categories = categorize_products(&products, &config);

            let output = output.unwrap_or_else(|| files::categorized_path(&input));
            files::write_categories(&output, &categories)?;

            println!("Categorized listing saved to: {}", output.display());
            println!("Products processed: {}", products.len());
            println!("Categories found: {}", categories.len());
            Ok(())
        }
        Command::Sample { output } => {
            let products = sample::sample_products();
            files::write_json(&output, &products)?;
            println!("Sample listing saved to: {}", output.display());
            println!("Sample products: {}", products.len());
            Ok(())
        }
        Command::Combine { inputs, output } => {
            let combined = files::combine_listings(&inputs)?;
            files::write_json(&output, &combined)?;
            println!("Combined listing saved to: {}", output.display());
            println!("Products combined: {}", combined.len());
            Ok(())
        }
    }
}
