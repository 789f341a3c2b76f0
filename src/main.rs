//! Entry point: parse CLI, load configuration and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_stats::{
    cli::{Commands, NbaStats, ShowCmd, StoreCmd},
    commands::{report, Collector},
    config::Config,
    nba::NbaClient,
    storage::StatsDatabase,
};
use tracing_subscriber::EnvFilter;

/// Env var holding a full `tracing` filter directive; wins over every other level setting.
const LOG_FILTER_ENV_VAR: &str = "NBA_STATS_LOG";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("nba-stats error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let app = NbaStats::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    init_tracing(app.log_level_override().unwrap_or(config.log_level.as_str()))?;

    let db = StatsDatabase::open(&config.database)
        .with_context(|| format!("failed to open {}", config.database.connection_url()))?;

    match app.command {
        Commands::Show { cmd } => match cmd {
            ShowCmd::Players { json } => report::handle_show_players(&db, json)?,
            ShowCmd::TeamGames { json } => report::handle_show_team_games(&db, json)?,
            ShowCmd::Shots { player_id, json } => {
                report::handle_show_shots(&db, player_id, json)?
            }
        },

        Commands::Store { cmd, json } => {
            let client = NbaClient::with_base_urls(&config.stats_base_url, &config.live_base_url)?;
            let mut collector = Collector::new(client, db, app.day_offset);
            let reports = match cmd {
                StoreCmd::Teams => vec![collector.store_team_data()],
                StoreCmd::Day { kind } => vec![collector.store_day_data(kind).await?],
                StoreCmd::Games => collector.store_single_game_data().await?,
                StoreCmd::PlayByPlay => collector.store_playbyplay_data().await?,
            };
            report::handle_commit_summary(&reports, json)?;
        }

        Commands::RunDaily { json } => {
            let client = NbaClient::with_base_urls(&config.stats_base_url, &config.live_base_url)?;
            let mut collector = Collector::new(client, db, app.day_offset);
            let reports = collector.run_daily().await?;
            report::handle_commit_summary(&reports, json)?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
    Ok(())
}
