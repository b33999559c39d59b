//! insights-probe - fetch one Insights report and print the normalized result
//!
//! Prints the status code on the first line and the JSON body after it.

use clap::Parser;
use inventory_ops::utils::logging::init_logging;
use inventory_ops::{Config, InsightsHttpClient, ReportFetcher};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "insights-probe", version, about = "Fetch an Insights report")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "INVENTORY_OPS_CONFIG")]
    config: Option<PathBuf>,

    /// Report URL
    #[arg(long)]
    url: String,

    /// Id of a credential declared under `insights.credentials`
    #[arg(long)]
    credential: u64,

    /// Id of the user the request runs as
    #[arg(long, default_value_t = 1)]
    actor: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    }
    .with_env_overrides()?;

    init_logging(&config.logging)?;

    let client = InsightsHttpClient::from_config(&config.insights)?;
    let result = ReportFetcher::new(Arc::new(client))
        .get_insights(&args.url, args.credential, args.actor)
        .await;

    println!("{}", result.status_code);
    println!("{}", serde_json::to_string_pretty(&result.message)?);

    Ok(if result.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
