//! Clearwave CLI — submit audio files to the processing endpoint.
//!
//! Set CLEARWAVE_API_URL (or API_URL) to point at the service.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use clearwave_api_client::ProcessingClient;
use clearwave_cli::{format_size, init_tracing};
use clearwave_core::constants::{DENOISING_ALGORITHMS, EXTRACTION_ALGORITHMS};
use clearwave_core::models::SubmissionRequest;
use clearwave_core::page::ResultRegion;

#[derive(Parser)]
#[command(name = "clearwave", about = "Client for the Clearwave audio processing service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a file for denoising and feature extraction
    Process {
        /// Path to the audio file to submit
        file: std::path::PathBuf,
        /// Denoising algorithm identifier
        #[arg(long)]
        denoising_algorithm: String,
        /// Feature-extraction algorithm identifier
        #[arg(long)]
        extraction_algorithm: String,
        /// Free-form, algorithm-specific parameters
        #[arg(long, default_value = "")]
        parameters: String,
        /// Print the rendered audio element instead of the JSON result
        #[arg(long)]
        html: bool,
    },
    /// List the supported algorithm identifiers
    Algorithms,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            file,
            denoising_algorithm,
            extraction_algorithm,
            parameters,
            html,
        } => {
            let client = ProcessingClient::from_env()
                .context("Failed to create client. Set CLEARWAVE_API_URL (or API_URL)")?;

            let request = SubmissionRequest::from_path(
                &file,
                &denoising_algorithm,
                &extraction_algorithm,
                &parameters,
            )?;
            tracing::info!(
                "Submitting {} ({})",
                file.display(),
                format_size(request.file_size() as u64)
            );

            let mut region = ResultRegion::new();
            let result = client.submit(request, &mut region).await?;

            if html {
                println!("{}", region.contents());
            } else {
                print_json(&result)?;
            }
        }
        Commands::Algorithms => {
            print_json(&serde_json::json!({
                "denoising": DENOISING_ALGORITHMS,
                "extraction": EXTRACTION_ALGORITHMS,
            }))?;
        }
    }

    Ok(())
}
