//! CLI argument definitions and parsing.

pub mod types;

use crate::catalog::DayKind;
use clap::{Parser, Subcommand};
use types::{DayOffset, PlayerId};

#[derive(Debug, Subcommand)]
pub enum StoreCmd {
    /// Seed the `teams` table from the built-in franchise list.
    Teams,

    /// Fetch the day scoreboard and commit one kind of it.
    Day {
        /// headers, line_score, last_meeting, series_standing, east_standing or west_standing
        kind: DayKind,
    },

    /// Commit box scores for every game on the day's scoreboard.
    Games,

    /// Commit play-by-play actions for every game on the day's scoreboard.
    PlayByPlay,
}

#[derive(Debug, Subcommand)]
pub enum ShowCmd {
    /// Players seen in collected box scores.
    Players {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// One line per team per game with running home/away counts.
    TeamGames {
        #[clap(long)]
        json: bool,
    },

    /// Field-goal attempts for one player.
    Shots {
        #[clap(long, short)]
        player_id: PlayerId,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA stats collector", version)]
pub struct NbaStats {
    /// Days relative to today for scoreboard requests (-1 is yesterday).
    #[clap(
        long,
        global = true,
        allow_hyphen_values = true,
        default_value_t = DayOffset::yesterday()
    )]
    pub day_offset: DayOffset,

    /// Log at debug level.
    #[clap(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[clap(long, short, global = true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch from stats.nba.com and commit into the database.
    Store {
        #[clap(subcommand)]
        cmd: StoreCmd,

        /// Print the commit summary as JSON.
        #[clap(long, global = true)]
        json: bool,
    },

    /// Every day kind, then every game's box score.
    RunDaily {
        #[clap(long)]
        json: bool,
    },

    /// Read collected data back out.
    Show {
        #[clap(subcommand)]
        cmd: ShowCmd,
    },
}

impl NbaStats {
    /// Log level implied by `--verbose`/`--quiet`, if either was given.
    pub fn log_level_override(&self) -> Option<&'static str> {
        match (self.verbose, self.quiet) {
            (true, _) => Some("debug"),
            (_, true) => Some("warn"),
            _ => None,
        }
    }
}
