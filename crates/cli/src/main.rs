//! `ghreport` command-line entry point
//!
//! Two subcommands, one per report: `seats` produces the team/seat
//! reconciliation CSV, `metrics` the flattened per-team usage CSV. All
//! connection settings come from the environment (a `.env` file is honored);
//! flags override the output path and login-suffix token.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use ghreport_core::{run_metrics_report, run_seat_report};
use ghreport_domain::constants::HTTP_TIMEOUT_SECS;
use ghreport_domain::ReportConfig;
use ghreport_infra::export::{CsvSink, ReportKind};
use ghreport_infra::github::{DirectoryClient, MetricsClient, SeatsClient, TeamsClient};
use ghreport_infra::http::{HttpClient, RetryPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghreport", version, about = "Enterprise Copilot seat and usage reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output CSV path (overrides OUTPUT_CSV and the default dated filename).
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Team membership / billing seat reconciliation report.
    Seats {
        /// Login suffix token; overrides LOGIN_SUFFIX and the value derived
        /// from the enterprise slug.
        #[arg(long)]
        login_suffix: Option<String>,
    },
    /// Per-team daily Copilot usage metrics report.
    Metrics,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ghreport_infra::load_from_env().context("loading configuration")?;
    if let Some(path) = cli.output {
        config.output_csv = Some(path);
    }

    match cli.command {
        Command::Seats { login_suffix } => {
            if let Some(suffix) = login_suffix {
                config.login_suffix = Some(suffix);
            }
            run_seats(&config).await
        }
        Command::Metrics => run_metrics(&config).await,
    }
}

async fn run_seats(config: &ReportConfig) -> anyhow::Result<()> {
    let http = Arc::new(
        HttpClient::builder()
            .bearer_token(config.token.clone())
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?,
    );
    let directory = DirectoryClient::new(Arc::clone(&http), &config.api_base, &config.enterprise);
    let seats = SeatsClient::new(Arc::clone(&http), &config.api_base, &config.enterprise);
    let teams = TeamsClient::new(Arc::clone(&http), &config.api_base, &config.enterprise);

    let default_path = PathBuf::from(format!(
        "enterprise_teams_users_copilot_{}.csv",
        Utc::now().format("%Y%m%d")
    ));
    let path = config.output_csv.as_deref().unwrap_or(&default_path);
    let mut sink = open_sink(path, ReportKind::TeamSeat)?;
    let summary = run_seat_report(
        &directory,
        &seats,
        &teams,
        &mut sink,
        &config.enterprise,
        config.login_suffix.as_deref(),
        Utc::now(),
    )
    .await?;

    info!(
        teams = summary.teams,
        rows = summary.rows,
        unmatched = summary.unmatched_identity,
        "seat report complete"
    );
    Ok(())
}

async fn run_metrics(config: &ReportConfig) -> anyhow::Result<()> {
    // Metrics walks one endpoint per team against a shared quota, so this
    // client reacts to rate-limit headers instead of retrying blind.
    let http = Arc::new(
        HttpClient::builder()
            .bearer_token(config.token.clone())
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .policy(RetryPolicy::RateAware)
            .build()?,
    );
    let teams = TeamsClient::new(Arc::clone(&http), &config.api_base, &config.enterprise)
        .with_link_pagination();
    let metrics = MetricsClient::new(Arc::clone(&http), &config.api_base, &config.enterprise);

    let default_path = PathBuf::from(format!(
        "copilot_usage_data_teams_{}_{}.csv",
        config.enterprise,
        Utc::now().format("%Y-%m-%d")
    ));
    let path = config.output_csv.as_deref().unwrap_or(&default_path);
    let mut sink = open_sink(path, ReportKind::Metrics)?;
    let summary = run_metrics_report(&teams, &metrics, &mut sink, &config.enterprise).await?;

    info!(
        teams = summary.teams,
        rows = summary.rows,
        skipped = summary.teams_without_metrics,
        "metrics report complete"
    );
    Ok(())
}

fn open_sink(path: &Path, kind: ReportKind) -> anyhow::Result<CsvSink<File>> {
    CsvSink::create(path, kind)
        .with_context(|| format!("opening output file {}", path.display()))
}
