// src/main.rs
mod config;
mod extractors;
mod storage;
mod utils;

use clap::Parser;
use std::process::ExitCode;
use config::RunConfig;
use extractors::section::SectionExtractor;
use storage::StorageManager;
use utils::AppError;

/// Split a markdown file on top-level `# ` headers and write the sections as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Markdown file to read [default: plans.md]
    input: Option<String>,

    /// JSON file to write [default: output.json]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting processing for args: {:?}", args);

    let config = RunConfig::from_args(args.input, args.output);

    match run(&config).await {
        Ok(count) => {
            println!(
                "✓ Parsed {} and wrote output to {}",
                config.input_path.display(),
                config.output_path.display()
            );
            println!("Found {} header(s)", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read, extract, write. Returns the number of distinct headers written.
async fn run(config: &RunConfig) -> Result<usize, AppError> {
    let storage = StorageManager::new(config);
    let extractor = SectionExtractor::new();

    let content = storage.read_markdown().await?;
    let sections = extractor.extract(&content);
    tracing::info!("Extracted {} section(s) from {}", sections.len(), storage.input_path().display());
    if sections.is_empty() {
        tracing::info!("No top-level '# ' headers found in {}", storage.input_path().display());
    } else {
        tracing::debug!("Headers: {:?}", sections.keys().collect::<Vec<_>>());
    }

    storage.write_sections(&sections).await?;
    tracing::debug!("Processing finished for {}", storage.output_path().display());

    Ok(sections.len())
}
