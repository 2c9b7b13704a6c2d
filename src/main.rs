mod analyzer;
mod models;
mod summary;
mod web;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "livelyapi")]
#[command(about = "LivelyAPI - normalize free-form API descriptions into a canonical form")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an API description (vendor name, OpenAPI document, or URL)
    Analyze {
        /// The description itself; omit to read it from --file
        input: Option<String>,
        /// Read the description from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Write the full analysis report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start the web interface
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            file,
            output,
        } => {
            let text = match (input, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => anyhow::bail!("provide an input string or --file"),
            };

            let api = analyzer::analyze(&text)?;
            let description = summary::describe(&api);
            println!("{}", description);

            if let Some(output_path) = output {
                let report = models::AnalysisReport {
                    analyzed_at: chrono::Utc::now(),
                    description,
                    api,
                };
                if let Some(parent) = output_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;
                println!("Analysis saved to: {}", output_path.display());
            }
        }
        Commands::Serve { port } => {
            println!("Starting web server on port {}...", port);
            web::run_server(port).await?;
        }
    }

    Ok(())
}
