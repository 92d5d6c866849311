//! Player Roster
//!
//! Builds the reference roster, runs both queries, and prints the results.

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

use player_roster::{
    PlayerRecord, QueryReport, RecordCollection, RosterConfig, REFERENCE_ROSTER_SIZE, VERSION,
};

fn main() -> Result<()> {
    let config = RosterConfig::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over ROSTER_LOG_LEVEL; logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(config.log_level).into()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Player Roster v{}", VERSION);

    let roster = reference_roster();
    roster
        .ensure_unique_ids()
        .context("Reference roster has duplicate ids")?;
    info!("Loaded {} records", roster.len());

    let report = QueryReport::run(&roster, &config.player_type, &config.match_type);
    debug!("Report: {}", serde_json::to_string(&report)?);

    println!("{report}");
    Ok(())
}

/// Fixed roster of `REFERENCE_ROSTER_SIZE` records.
fn reference_roster() -> RecordCollection {
    let roster = RecordCollection::new(vec![
        PlayerRecord::new(1, "A", 50, "bat", "T20"),
        PlayerRecord::new(2, "B", 30, "bat", "ODI"),
        PlayerRecord::new(3, "C", 70, "bowl", "T20"),
        PlayerRecord::new(4, "D", 10, "bat", "T20"),
    ]);
    debug_assert_eq!(roster.len(), REFERENCE_ROSTER_SIZE);
    roster
}
