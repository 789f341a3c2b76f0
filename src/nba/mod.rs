//! NBA data sources
//!
//! - `http`: the [`StatsSource`](http::StatsSource) trait and its reqwest client
//! - `types`: wire envelopes and the result-set row adapter
//! - `endpoints`: typed views over scoreboard, box score and play-by-play
//! - `teams`: the static franchise list

pub mod endpoints;
pub mod http;
pub mod teams;
pub mod types;

pub use endpoints::{BoxScore, PlayByPlay, Scoreboard};
pub use http::{NbaClient, StatsSource};
pub use types::{ResultSet, ResultSets, RowMap};
