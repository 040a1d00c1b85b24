//! CLI for checking one job's flag across all records
//!
//! Exits 0 when every record has the job's flag set. Otherwise writes the
//! failing records as a JSON array and exits 1, so a scheduler can stop a
//! job chain on the first failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sampleapp_core::config::Config;
use sampleapp_core::domains::sample_app::activities::{check_job, write_report};
use sampleapp_core::domains::sample_app::Job;
use sampleapp_core::kernel::ServerDeps;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "job_check")]
#[command(about = "Report records whose flag for a job is not set")]
struct Cli {
    /// Job to check (Job0001..Job0005, or 1..5)
    #[arg(long, value_parser = parse_job)]
    job: Job,

    /// Directory the failure report is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn parse_job(s: &str) -> Result<Job, String> {
    s.parse().map_err(|e: sampleapp_core::domains::sample_app::SampleAppError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    let deps = ServerDeps::from_pool(pool);

    let report = check_job(cli.job, &deps).await?;

    match write_report(&report, &cli.output_dir).await? {
        None => println!("{} was successful", report.job),
        Some(path) => println!(
            "{} failed for {} record(s). Please check the failure records in {}",
            report.job,
            report.failures.len(),
            path.display()
        ),
    }

    Ok(ExitCode::from(report.exit_status()))
}
