//! Typed views over the three NBA responses the collector consumes.
//!
//! Each view owns one raw response and exposes one accessor per data kind.
//! The accessors are what the catalogs in [`crate::catalog`] point at.

use super::types::{ResultSets, RowMap};
use crate::catalog::ActionKind;
use crate::cli::types::{DayOffset, GameId};
use crate::error::{Result, StatsError};
use serde_json::Value;

/// Key the play-by-play adapter stamps onto every action.
pub const GAME_ID_KEY: &str = "game_id";

/// Field the play-by-play adapter classifies actions by.
pub const ACTION_TYPE_KEY: &str = "actionType";

/// Game IDs are ten digits; numeric feeds drop the leading zeros.
const GAME_ID_WIDTH: usize = 10;

/// Day-scoped scoreboard: game headers and standings for one day.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    day_offset: DayOffset,
    sets: ResultSets,
}

impl Scoreboard {
    pub const GAME_HEADER: usize = 0;
    pub const LINE_SCORE: usize = 1;
    pub const SERIES_STANDINGS: usize = 2;
    pub const LAST_MEETING: usize = 3;
    pub const EAST_STANDINGS: usize = 4;
    pub const WEST_STANDINGS: usize = 5;

    pub fn new(day_offset: DayOffset, sets: ResultSets) -> Self {
        Self { day_offset, sets }
    }

    pub fn day_offset(&self) -> DayOffset {
        self.day_offset
    }

    pub fn game_header(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::GAME_HEADER)?.collect())
    }

    pub fn line_score(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::LINE_SCORE)?.collect())
    }

    pub fn series_standings(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::SERIES_STANDINGS)?.collect())
    }

    pub fn last_meeting(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::LAST_MEETING)?.collect())
    }

    pub fn east_standing(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::EAST_STANDINGS)?.collect())
    }

    pub fn west_standing(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::WEST_STANDINGS)?.collect())
    }

    /// Game IDs of every header row, in source order.
    pub fn games_list(&self) -> Result<Vec<GameId>> {
        self.sets
            .rows(Self::GAME_HEADER)?
            .map(|row| match row.get(GAME_ID_KEY) {
                Some(Value::String(id)) => Ok(GameId::new(id.as_str())),
                Some(Value::Number(n)) => match n.as_u64() {
                    Some(id) => Ok(GameId::new(format!("{id:0width$}", width = GAME_ID_WIDTH))),
                    None => Err(StatsError::MalformedResultSet {
                        name: "GameHeader".to_string(),
                        message: format!("unusable game_id {n}"),
                    }),
                },
                other => Err(StatsError::MalformedResultSet {
                    name: "GameHeader".to_string(),
                    message: format!("unusable game_id {:?}", other),
                }),
            })
            .collect()
    }
}

/// Game-scoped traditional box score.
#[derive(Debug, Clone)]
pub struct BoxScore {
    game_id: GameId,
    sets: ResultSets,
}

impl BoxScore {
    pub const PLAYER_STATS: usize = 0;
    pub const TEAM_STATS: usize = 1;
    pub const STARTER_BENCH_STATS: usize = 2;

    pub fn new(game_id: GameId, sets: ResultSets) -> Self {
        Self { game_id, sets }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn player_stats(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::PLAYER_STATS)?.collect())
    }

    pub fn team_stats(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::TEAM_STATS)?.collect())
    }

    pub fn starter_bench_stats(&self) -> Result<Vec<RowMap>> {
        Ok(self.sets.rows(Self::STARTER_BENCH_STATS)?.collect())
    }
}

/// Game-scoped play-by-play feed.
///
/// The live feed does not repeat the game ID on each action, so every
/// action is stamped with it here, then classified by its `actionType`.
#[derive(Debug, Clone)]
pub struct PlayByPlay {
    game_id: GameId,
    actions: Vec<(Option<ActionKind>, RowMap)>,
}

impl PlayByPlay {
    pub fn new(game_id: GameId, raw_actions: Vec<RowMap>) -> Self {
        let actions = raw_actions
            .into_iter()
            .map(|action| {
                let kind = action
                    .get(ACTION_TYPE_KEY)
                    .and_then(Value::as_str)
                    .and_then(ActionKind::classify);

                let mut tagged = RowMap::new();
                tagged.insert(
                    GAME_ID_KEY.to_string(),
                    Value::String(game_id.as_str().to_string()),
                );
                tagged.extend(action);
                (kind, tagged)
            })
            .collect();

        Self { game_id, actions }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Tagged actions of one kind, in source order.
    pub fn actions(&self, kind: ActionKind) -> Vec<RowMap> {
        self.actions
            .iter()
            .filter(|(k, _)| *k == Some(kind))
            .map(|(_, action)| action.clone())
            .collect()
    }

    pub fn period(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Period))
    }

    pub fn jumpball(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Jumpball))
    }

    pub fn turnover(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Turnover))
    }

    pub fn steal(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Steal))
    }

    pub fn two_point(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::TwoPoint))
    }

    pub fn foul(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Foul))
    }

    pub fn freethrow(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::FreeThrow))
    }

    pub fn three_point(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::ThreePoint))
    }

    pub fn rebound(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Rebound))
    }

    pub fn block(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Block))
    }

    pub fn timeout(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Timeout))
    }

    pub fn substitution(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Substitution))
    }

    pub fn violation(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Violation))
    }

    pub fn game(&self) -> Result<Vec<RowMap>> {
        Ok(self.actions(ActionKind::Game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nba::types::ResultSet;
    use serde_json::json;

    fn set(name: &str, headers: &[&str], rows: Vec<Vec<Value>>) -> ResultSet {
        ResultSet {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            row_set: rows,
        }
    }

    fn action(number: i64, action_type: &str) -> RowMap {
        match json!({"actionNumber": number, "actionType": action_type, "clock": "PT11M40.00S"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_scoreboard_games_list_in_source_order() {
        let sets = ResultSets::new(vec![set(
            "GameHeader",
            &["GAME_ID", "GAME_STATUS_ID"],
            vec![
                vec![json!("0022300002"), json!(3)],
                vec![json!("0022300001"), json!(3)],
            ],
        )]);
        let scoreboard = Scoreboard::new(DayOffset::yesterday(), sets);

        let games = scoreboard.games_list().unwrap();
        assert_eq!(
            games,
            vec![GameId::new("0022300002"), GameId::new("0022300001")]
        );
    }

    #[test]
    fn test_scoreboard_games_list_pads_numeric_ids() {
        let sets = ResultSets::new(vec![set(
            "GameHeader",
            &["GAME_ID"],
            vec![vec![json!(22300001)], vec![json!(-5)]],
        )]);
        let scoreboard = Scoreboard::new(DayOffset::default(), sets);
        assert!(matches!(
            scoreboard.games_list(),
            Err(StatsError::MalformedResultSet { .. })
        ));

        let sets = ResultSets::new(vec![set(
            "GameHeader",
            &["GAME_ID"],
            vec![vec![json!(22300001)]],
        )]);
        let scoreboard = Scoreboard::new(DayOffset::default(), sets);
        assert_eq!(scoreboard.games_list().unwrap(), vec![GameId::new("0022300001")]);
    }

    #[test]
    fn test_scoreboard_games_list_rejects_missing_id() {
        let sets = ResultSets::new(vec![set(
            "GameHeader",
            &["GAME_STATUS_ID"],
            vec![vec![json!(3)]],
        )]);
        let scoreboard = Scoreboard::new(DayOffset::default(), sets);
        assert!(scoreboard.games_list().is_err());
    }

    #[test]
    fn test_scoreboard_missing_standings_set_fails() {
        let sets = ResultSets::new(vec![set("GameHeader", &["GAME_ID"], vec![])]);
        let scoreboard = Scoreboard::new(DayOffset::default(), sets);
        assert!(scoreboard.game_header().unwrap().is_empty());
        assert!(matches!(
            scoreboard.west_standing(),
            Err(StatsError::ResultSetOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_box_score_accessors_pick_their_index() {
        let sets = ResultSets::new(vec![
            set("PlayerStats", &["PLAYER_ID"], vec![vec![json!(2544)]]),
            set("TeamStats", &["TEAM_ID"], vec![vec![json!(1610612747)]]),
            set(
                "TeamStarterBenchStats",
                &["STARTERS_BENCH"],
                vec![vec![json!("Starters")], vec![json!("Bench")]],
            ),
        ]);
        let box_score = BoxScore::new(GameId::new("0022300001"), sets);

        assert_eq!(box_score.player_stats().unwrap()[0]["player_id"], json!(2544));
        assert_eq!(box_score.team_stats().unwrap()[0]["team_id"], json!(1610612747));
        assert_eq!(box_score.starter_bench_stats().unwrap().len(), 2);
    }

    #[test]
    fn test_play_by_play_tags_game_id_first() {
        let pbp = PlayByPlay::new(GameId::new("0022300001"), vec![action(2, "period")]);
        let period = pbp.period().unwrap();

        assert_eq!(period.len(), 1);
        let first_key = period[0].keys().next().map(String::as_str);
        assert_eq!(first_key, Some("game_id"));
        assert_eq!(period[0]["game_id"], json!("0022300001"));
        assert_eq!(period[0]["actionNumber"], json!(2));
    }

    #[test]
    fn test_steal_routes_only_to_steal() {
        let pbp = PlayByPlay::new(GameId::new("0022300001"), vec![action(7, "steal")]);

        for kind in ActionKind::ALL {
            let expected = usize::from(kind == ActionKind::Steal);
            assert_eq!(pbp.actions(kind).len(), expected, "kind {kind}");
        }
    }

    #[test]
    fn test_unknown_action_type_routes_nowhere() {
        let pbp = PlayByPlay::new(
            GameId::new("0022300001"),
            vec![action(9, "instantreplay"), action(10, "Steal")],
        );

        for kind in ActionKind::ALL {
            assert!(pbp.actions(kind).is_empty(), "kind {kind}");
        }
    }

    #[test]
    fn test_foul_accessor_returns_fouls_not_two_pointers() {
        let pbp = PlayByPlay::new(
            GameId::new("0022300001"),
            vec![action(11, "2pt"), action(12, "foul")],
        );

        let fouls = pbp.foul().unwrap();
        assert_eq!(fouls.len(), 1);
        assert_eq!(fouls[0]["actionNumber"], json!(12));
        assert_eq!(pbp.two_point().unwrap()[0]["actionNumber"], json!(11));
    }
}
