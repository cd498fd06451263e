use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scout_client::HasDataClient;
use scout_core::models::{DEFAULT_DOMAIN, SearchQuery};
use scout_core::{JsonFileStore, RunOutcome, ScoutConfig, ScrapeService, StopReason, validate_input};

const DEFAULT_JOB_TITLE: &str = "Machine Learning Engineer";
const DEFAULT_LOCATION: &str = "Dhaka, Bangladesh";
const DEFAULT_LIMIT: &str = "5";

#[derive(Parser)]
#[command(
    name = "indeed-scout",
    version,
    about = "Collect Indeed job listings through the HasData API"
)]
struct Cli {
    /// Job title to search for
    #[arg(short, long, default_value = DEFAULT_JOB_TITLE)]
    job_title: String,

    /// Location to search in
    #[arg(short, long, default_value = DEFAULT_LOCATION)]
    location: String,

    /// Maximum number of listings to collect
    #[arg(short = 'n', long, default_value = DEFAULT_LIMIT, conflicts_with = "all")]
    limit: String,

    /// Paginate until the search is exhausted instead of stopping at --limit
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Indeed domain to search
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    domain: String,

    /// Directory for output files (overrides SCOUT_OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    tokio::select! {
        result = run(cli) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("An error occurred: {e:#}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            report_cancelled();
            ExitCode::SUCCESS
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let limit = (!cli.all).then_some(cli.limit.as_str());
    let query = validate_input(&cli.job_title, &cli.location, limit)?.with_domain(cli.domain);

    let mut config = ScoutConfig::from_env()?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    log_banner(&query);

    let client = HasDataClient::from_config(&config).context("Failed to create HTTP client")?;
    let store = JsonFileStore::new(&config.output_dir);
    let service = ScrapeService::new(client, store);

    report_outcome(service.run(&query).await);

    Ok(())
}

fn report_outcome(outcome: RunOutcome) {
    match outcome {
        RunOutcome::NoListings(StopReason::Failed(reason)) => {
            tracing::warn!("Could not retrieve job listings ({reason}). Try again later.");
        }
        RunOutcome::NoListings(_) => {
            tracing::info!("No job URLs found. Try different search terms.");
        }
        RunOutcome::NoDetails { attempted } => {
            tracing::warn!("No job details were successfully fetched ({attempted} attempted).");
        }
        RunOutcome::Saved { path, count } => {
            tracing::info!("Job scraping completed successfully: {count} jobs saved.");
            println!("{}", path.display());
        }
        RunOutcome::SaveFailed { count, error } => {
            tracing::error!(%error, "Scraped {count} jobs but could not save them.");
        }
    }
}

fn report_cancelled() {
    tracing::info!("Operation cancelled by user.");
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(with_default_directives(EnvFilter::from_default_env())?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Library crates log under `scout_*`, this binary under `indeed_scout`.
fn with_default_directives(filter: EnvFilter) -> Result<EnvFilter> {
    Ok(filter
        .add_directive("scout=info".parse()?)
        .add_directive("indeed_scout=info".parse()?))
}

fn log_banner(query: &SearchQuery) {
    let limit = query
        .limit
        .map(|l| l.to_string())
        .unwrap_or_else(|| "ALL (paginate)".to_string());

    tracing::info!("Starting job scraping process");
    tracing::info!("Job Title: {}", query.job_title);
    tracing::info!("Location:  {}", query.location);
    tracing::info!("Limit:     {limit}");
    tracing::info!("Domain:    {}", query.domain);
}
