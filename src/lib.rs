//! NBA stats collector
//!
//! Pulls daily scoreboards, per-game box scores and play-by-play feeds from
//! the public NBA stats endpoints and commits them row by row into a local
//! SQLite database, one table per data kind.
//!
//! ## Layout
//!
//! - [`nba`]: HTTP client, wire envelopes and typed endpoint views
//! - [`catalog`]: data kind → table → accessor mappings
//! - [`storage`]: table schemas, row coercion, commits and read queries
//! - [`commands`]: the [`Collector`](commands::Collector) and console output
//! - [`config`]: `DB_*` and friends, read from the environment or a `.env` file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{commands::Collector, nba::NbaClient, storage::StatsDatabase, DayOffset};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let db = StatsDatabase::open_path("nba_stats.db")?;
//! let mut collector = Collector::new(NbaClient::new()?, db, DayOffset::yesterday());
//! for report in collector.run_daily().await? {
//!     println!("{}: {} committed", report.table, report.committed);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DayOffset, GameId, PlayerId};
pub use error::{Result, StatsError};
