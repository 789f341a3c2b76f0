//! Collection runs: fetch from the stats source, commit into the database.

use crate::{
    catalog::{CatalogEntry, DayKind, BOX_SCORE_CATALOG, DAY_CATALOG, PLAY_BY_PLAY_CATALOG},
    cli::types::{DayOffset, GameId},
    nba::{teams::team_rows, BoxScore, PlayByPlay, Scoreboard, StatsSource},
    storage::{tables, CommitReport, StatsDatabase},
    Result,
};
use tracing::{info, warn};

/// Drives one source into one database.
///
/// Runs are strictly sequential: one request at a time, games in the order
/// the scoreboard lists them, kinds in catalog order.
pub struct Collector<S> {
    source: S,
    db: StatsDatabase,
    day_offset: DayOffset,
}

impl<S: StatsSource> Collector<S> {
    pub fn new(source: S, db: StatsDatabase, day_offset: DayOffset) -> Self {
        Self {
            source,
            db,
            day_offset,
        }
    }

    pub fn day_offset(&self) -> DayOffset {
        self.day_offset
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn database(&self) -> &StatsDatabase {
        &self.db
    }

    pub fn into_database(self) -> StatsDatabase {
        self.db
    }

    async fn scoreboard(&self) -> Result<Scoreboard> {
        let sets = self.source.scoreboard(self.day_offset).await?;
        Ok(Scoreboard::new(self.day_offset, sets))
    }

    fn commit_entry<K, V>(
        &mut self,
        entry: &CatalogEntry<K, V>,
        view: &V,
    ) -> Result<CommitReport> {
        let rows = (entry.accessor)(view)?;
        Ok(self.db.commit_rows(rows, entry.schema))
    }

    /// Seed the `teams` table from the static franchise list.
    pub fn store_team_data(&mut self) -> CommitReport {
        self.db.commit_rows(team_rows(), &tables::TEAMS)
    }

    /// Fetch the day scoreboard and commit one kind of it.
    pub async fn store_day_data(&mut self, kind: DayKind) -> Result<CommitReport> {
        let scoreboard = self.scoreboard().await?;
        self.commit_entry(kind.entry(), &scoreboard)
    }

    /// Fetch the day scoreboard once and commit every kind in catalog order.
    pub async fn store_all_day_data(&mut self) -> Result<Vec<CommitReport>> {
        let scoreboard = self.scoreboard().await?;
        let mut reports = Vec::with_capacity(DAY_CATALOG.len());
        for entry in DAY_CATALOG.iter() {
            reports.push(self.commit_entry(entry, &scoreboard)?);
        }
        Ok(reports)
    }

    /// Commit the box score of every game on the day's scoreboard.
    ///
    /// A game whose box score cannot be fetched or read is logged and
    /// skipped; the remaining games still run.
    pub async fn store_single_game_data(&mut self) -> Result<Vec<CommitReport>> {
        let games = self.scoreboard().await?.games_list()?;
        info!(games = games.len(), day_offset = %self.day_offset, "collecting box scores");

        let mut reports = Vec::new();
        for game_id in games {
            match self.store_box_score(&game_id).await {
                Ok(mut game_reports) => reports.append(&mut game_reports),
                Err(e) => warn!(%game_id, error = %e, "skipping box score"),
            }
        }
        Ok(reports)
    }

    /// Commit every box-score kind for one game.
    pub async fn store_box_score(&mut self, game_id: &GameId) -> Result<Vec<CommitReport>> {
        let sets = self.source.box_score(game_id).await?;
        let box_score = BoxScore::new(game_id.clone(), sets);

        let mut reports = Vec::with_capacity(BOX_SCORE_CATALOG.len());
        for entry in BOX_SCORE_CATALOG.iter() {
            match self.commit_entry(entry, &box_score) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    warn!(%game_id, kind = %entry.kind, error = %e, "skipping box-score kind")
                }
            }
        }
        Ok(reports)
    }

    /// Commit the play-by-play of every game on the day's scoreboard.
    pub async fn store_playbyplay_data(&mut self) -> Result<Vec<CommitReport>> {
        let games = self.scoreboard().await?.games_list()?;
        info!(games = games.len(), day_offset = %self.day_offset, "collecting play-by-play");

        let mut reports = Vec::new();
        for game_id in games {
            match self.store_game_play_by_play(&game_id).await {
                Ok(mut game_reports) => reports.append(&mut game_reports),
                Err(e) => warn!(%game_id, error = %e, "skipping play-by-play"),
            }
        }
        Ok(reports)
    }

    /// Commit every action kind for one game.
    pub async fn store_game_play_by_play(
        &mut self,
        game_id: &GameId,
    ) -> Result<Vec<CommitReport>> {
        let actions = self.source.play_by_play(game_id).await?;
        let pbp = PlayByPlay::new(game_id.clone(), actions);

        let mut reports = Vec::with_capacity(PLAY_BY_PLAY_CATALOG.len());
        for entry in PLAY_BY_PLAY_CATALOG.iter() {
            reports.push(self.commit_entry(entry, &pbp)?);
        }
        Ok(reports)
    }

    /// The daily job: every day kind in catalog order, then box scores.
    pub async fn run_daily(&mut self) -> Result<Vec<CommitReport>> {
        let mut reports = self.store_all_day_data().await?;
        reports.extend(self.store_single_game_data().await?);
        Ok(reports)
    }
}
