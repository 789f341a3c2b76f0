//! HTTP access to the NBA stats and live-data endpoints

use super::types::{PlayByPlayEnvelope, ResultSets, RowMap, StatsEnvelope};
use crate::cli::types::{DayOffset, GameId};
use crate::Result;
use chrono::Local;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT,
};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Base path for the `stats.nba.com` endpoints.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Base path for the live-data CDN.
pub const LIVE_BASE_URL: &str = "https://cdn.nba.com/static/json/liveData";

const LEAGUE_ID: &str = "00";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of raw NBA responses.
///
/// The collector only sees this trait, so tests can feed it canned payloads.
pub trait StatsSource {
    /// Day scoreboard result sets for `day_offset` days from today.
    fn scoreboard(
        &self,
        day_offset: DayOffset,
    ) -> impl Future<Output = Result<ResultSets>> + Send;

    /// Traditional box-score result sets for one game.
    fn box_score(&self, game_id: &GameId) -> impl Future<Output = Result<ResultSets>> + Send;

    /// Raw play-by-play actions for one game, untagged.
    fn play_by_play(
        &self,
        game_id: &GameId,
    ) -> impl Future<Output = Result<Vec<RowMap>>> + Send;
}

/// Headers `stats.nba.com` expects from a browser; requests without them hang.
pub fn stats_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
        ),
    );
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_str("stats")?,
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_str("true")?,
    );
    Ok(h)
}

/// reqwest-backed [`StatsSource`]
#[derive(Debug, Clone)]
pub struct NbaClient {
    client: Client,
    stats_base_url: String,
    live_base_url: String,
}

impl NbaClient {
    /// Client against the public NBA hosts.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(STATS_BASE_URL, LIVE_BASE_URL)
    }

    /// Client against custom hosts (mirrors, mock servers).
    pub fn with_base_urls(stats_base_url: &str, live_base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(stats_header_map()?)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            stats_base_url: stats_base_url.trim_end_matches('/').to_string(),
            live_base_url: live_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_result_sets(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<ResultSets> {
        let url = format!("{}/{}", self.stats_base_url, endpoint);
        debug!(%url, ?params, "fetching stats endpoint");

        let envelope = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsEnvelope>()
            .await?;

        Ok(ResultSets::new(envelope.result_sets))
    }
}

impl StatsSource for NbaClient {
    async fn scoreboard(&self, day_offset: DayOffset) -> Result<ResultSets> {
        let game_date = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let params = [
            ("DayOffset", day_offset.to_string()),
            ("GameDate", game_date),
            ("LeagueID", LEAGUE_ID.to_string()),
        ];
        self.get_result_sets("scoreboard", &params).await
    }

    async fn box_score(&self, game_id: &GameId) -> Result<ResultSets> {
        let params = [
            ("GameID", game_id.to_string()),
            ("StartPeriod", "0".to_string()),
            ("EndPeriod", "0".to_string()),
            ("StartRange", "0".to_string()),
            ("EndRange", "0".to_string()),
            ("RangeType", "0".to_string()),
        ];
        self.get_result_sets("boxscoretraditionalv2", &params).await
    }

    async fn play_by_play(&self, game_id: &GameId) -> Result<Vec<RowMap>> {
        let url = format!(
            "{}/playbyplay/playbyplay_{}.json",
            self.live_base_url, game_id
        );
        debug!(%url, "fetching play-by-play");

        let envelope = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<PlayByPlayEnvelope>()
            .await?;

        Ok(envelope.game.actions)
    }
}
