// src/main.rs
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod activity_log;
mod labels;
mod latex;
mod model;
mod schedule;

#[cfg(test)]
mod activity_log_tests;

use activity_log::{check_empty_days, read_activities};
use labels::Labels;
use model::Period;
use schedule::parse_schedule;

// Defaults mirror the fixed paths of the legacy report script.
pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.csv";
pub const DEFAULT_ACTIVITIES_FILE: &str = "activities.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "daily_reports.tex";
pub const DEFAULT_MANDATORY_WEEKS: usize = 2;

#[derive(Parser, Debug)]
#[command(
    name = "daily-reports",
    version,
    about = "Renders weekly attendance report tables from a schedule file and an activity log"
)]
struct Cli {
    /// Schedule file (semicolon-delimited; blank rows separate weeks)
    #[arg(long, default_value = DEFAULT_SCHEDULE_FILE)]
    schedule: PathBuf,

    /// Activity log file ('Week N' sections with '- ' activity lines)
    #[arg(long, default_value = DEFAULT_ACTIVITIES_FILE)]
    activities: PathBuf,

    /// Output LaTeX document
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Number of leading weeks subject to mandatory-attendance accounting
    #[arg(long, default_value_t = DEFAULT_MANDATORY_WEEKS)]
    mandatory_weeks: usize,

    /// Label set for the rendered report ('en' or 'de'); falls back to
    /// the REPORT_LANGUAGE environment variable
    #[arg(long)]
    language: Option<String>,

    /// JSON file with a complete custom label set (overrides --language)
    #[arg(long)]
    labels_file: Option<PathBuf>,
}

fn load_labels(cli: &Cli) -> Result<Labels> {
    if let Some(path) = &cli.labels_file {
        return Labels::from_file(path)
            .with_context(|| format!("Loading label set from {}", path.display()));
    }
    match cli
        .language
        .clone()
        .or_else(|| env::var("REPORT_LANGUAGE").ok())
    {
        Some(language) => Ok(Labels::for_language(&language)?),
        None => Ok(Labels::default()),
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Setting tracing subscriber failed")?;

    let cli = Cli::parse();
    let labels = load_labels(&cli)?;

    let weeks = parse_schedule(&cli.schedule)
        .with_context(|| format!("Parsing schedule file {}", cli.schedule.display()))?;
    info!(
        "Parsed {} week(s) from {}",
        weeks.len(),
        cli.schedule.display()
    );

    let mut period = Period::new(weeks, cli.mandatory_weeks);
    read_activities(&mut period, &cli.activities)
        .with_context(|| format!("Parsing activity log {}", cli.activities.display()))?;
    let period = period; // activity attachment done; read-only from here on

    for warning in check_empty_days(&period) {
        warn!("{}", warning);
    }

    let document = latex::render_period(&period, &labels).context("Rendering report")?;
    fs::write(&cli.output, &document)
        .with_context(|| format!("Writing report to {}", cli.output.display()))?;
    info!("Report written to {}", cli.output.display());

    Ok(())
}
