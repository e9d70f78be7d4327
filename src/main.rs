//! `slot-reserve`: books the slots closest to the requested times against the
//! booking site simulated from the configuration file, retrying in rounds.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use slot_reservation::builders::{build_batch, build_grid, build_scheduler};
use slot_reservation::config::BookingConfig;
use slot_reservation::core::{AppResult, BookingError, TracingAuditSink};
use slot_reservation::infra::InMemoryBookingPort;
use slot_reservation::runtime::{render_header, render_text, OutputFormat, RunSummary, TokioDelay};
use slot_reservation::util::init_tracing;

#[derive(Parser)]
#[command(name = "slot-reserve")]
#[command(about = "Book the slots closest to the requested times, retrying in rounds")]
struct Cli {
    /// Reservations as "<person> <HH:MM>"; replaces the configured list when given
    reservations: Vec<String>,

    /// Configuration file (defaults to ~/.slot-reserve.json)
    #[arg(long, env = "SLOT_RESERVE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Log every orchestration event (login, confirm, fail, wait...)
    #[arg(long)]
    audit: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<ExitCode> {
    let path = config_path(cli.config)?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = BookingConfig::from_json_str(&raw).map_err(anyhow::Error::msg)?;

    let batch = build_batch(&cli.reservations, &cfg)?;
    let grid = build_grid(&cfg.grid)?;
    let site_cfg = cfg
        .site
        .as_ref()
        .context("configuration has no `site` section to simulate")?;
    let site = InMemoryBookingPort::from_site_config(&grid, site_cfg)?;

    let mut scheduler = build_scheduler(&cfg, site, TokioDelay::new())?;
    if cli.audit {
        scheduler = scheduler.with_audit(Box::new(TracingAuditSink));
    }

    let started_at = chrono::Local::now().naive_local();
    tracing::info!(requests = batch.len(), config = %path.display(), "starting run");
    let report = match scheduler.run(batch).await {
        Ok(report) => report,
        Err(e @ BookingError::ReservationsNotOpen) => {
            eprintln!("ERROR: {e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    match cli.format {
        OutputFormat::Text => print!("{}{}", render_header(started_at), render_text(&report)),
        OutputFormat::Json => println!("{}", RunSummary::from(&report).to_json()?),
    }
    Ok(ExitCode::SUCCESS)
}

fn config_path(explicit: Option<PathBuf>) -> AppResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = std::env::var_os("HOME").context("HOME is not set; pass --config")?;
    Ok(PathBuf::from(home).join(".slot-reserve.json"))
}
