use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bookmarker_client::{ClientConfig, build_parser};
use bookmarker_core::PipelineOutcome;

#[derive(Parser)]
#[command(name = "bookmarker", version, about = "Readable article extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL and print the extracted article as JSON
    Parse {
        /// Article URL (http or https)
        #[arg(short, long)]
        url: String,

        /// Fetch timeout in seconds
        #[arg(short, long, env = "BOOKMARKER_FETCH_TIMEOUT_SECS")]
        timeout_secs: Option<u64>,
    },

    /// Run the pipeline over a local HTML file without fetching
    File {
        /// Path to the HTML file
        #[arg(short, long)]
        path: PathBuf,

        /// URL the document was retrieved from
        #[arg(short, long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bookmarker=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Parse { url, timeout_secs } => cmd_parse(&url, timeout_secs).await?,
        Commands::File { path, url } => cmd_file(&path, &url).await?,
    };

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(if outcome.is_article() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn cmd_parse(url: &str, timeout_secs: Option<u64>) -> Result<PipelineOutcome> {
    let mut config = ClientConfig::from_env()?;
    if let Some(secs) = timeout_secs {
        anyhow::ensure!(secs >= 1, "--timeout-secs must be at least 1");
        config.fetch_timeout = Duration::from_secs(secs);
    }

    let parser = build_parser(&config).context("Failed to build article parser")?;
    Ok(parser.parse_article(url).await)
}

async fn cmd_file(path: &Path, url: &str) -> Result<PipelineOutcome> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML file: {}", path.display()))?;

    tracing::info!("Read {} bytes of HTML from {}", html.len(), path.display());

    let config = ClientConfig::from_env()?;
    let parser = build_parser(&config).context("Failed to build article parser")?;
    Ok(parser.parse_document(url, html).await)
}
