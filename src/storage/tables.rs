//! Table definitions for every target of the collector.
//!
//! Each schema is the allow-list of columns the committer keeps from a source
//! row. Scoreboard and box-score columns are the lowercased stats headers;
//! play-by-play columns keep the live feed's camelCase field names.

use super::models::{Column, TableSchema};

// =============================================================================
// Teams
// =============================================================================

pub static TEAMS: TableSchema = TableSchema {
    name: "teams",
    columns: &[
        Column::int("id"),
        Column::text("full_name"),
        Column::text("abbreviation"),
        Column::text("nickname"),
        Column::text("city"),
        Column::text("state"),
        Column::int("year_founded"),
    ],
    primary_key: &["id"],
    unique: &["full_name", "abbreviation"],
};

// =============================================================================
// Scoreboard (per day)
// =============================================================================

pub static GAME_HEADERS: TableSchema = TableSchema {
    name: "game_headers",
    columns: &[
        Column::datetime("game_date_est"),
        Column::int("game_sequence"),
        Column::text("game_id"),
        Column::int("game_status_id"),
        Column::text("game_status_text"),
        Column::text("gamecode"),
        Column::int("home_team_id"),
        Column::int("visitor_team_id"),
        Column::text("season"),
        Column::int("live_period"),
        Column::text("live_pc_time"),
        Column::text("natl_tv_broadcaster_abbreviation"),
        Column::text("live_period_time_bcast"),
        Column::int("wh_status"),
    ],
    primary_key: &["game_id"],
    unique: &[],
};

pub static GAME_LINE_SCORES: TableSchema = TableSchema {
    name: "game_line_scores",
    columns: &[
        Column::datetime("game_date_est"),
        Column::int("game_sequence"),
        Column::text("game_id"),
        Column::int("team_id"),
        Column::text("team_abbreviation"),
        Column::text("team_city_name"),
        Column::text("team_wins_losses"),
        Column::int("pts_qtr1"),
        Column::int("pts_qtr2"),
        Column::int("pts_qtr3"),
        Column::int("pts_qtr4"),
        Column::int("pts_ot1"),
        Column::int("pts_ot2"),
        Column::int("pts_ot3"),
        Column::int("pts_ot4"),
        Column::int("pts_ot5"),
        Column::int("pts_ot6"),
        Column::int("pts_ot7"),
        Column::int("pts_ot8"),
        Column::int("pts_ot9"),
        Column::int("pts_ot10"),
        Column::int("pts"),
        Column::real("fg_pct"),
        Column::real("ft_pct"),
        Column::real("fg3_pct"),
        Column::int("ast"),
        Column::int("reb"),
        Column::int("tov"),
    ],
    primary_key: &["game_id", "team_id"],
    unique: &[],
};

pub static GAME_SERIES_STANDINGS: TableSchema = TableSchema {
    name: "game_series_standings",
    columns: &[
        Column::datetime("game_date_est"),
        Column::text("game_id"),
        Column::int("home_team_id"),
        Column::int("visitor_team_id"),
        Column::int("home_team_wins"),
        Column::int("home_team_losses"),
        Column::text("series_leader"),
    ],
    primary_key: &["game_id"],
    unique: &[],
};

pub static GAME_LAST_MEETING: TableSchema = TableSchema {
    name: "game_last_meeting",
    columns: &[
        Column::datetime("last_game_date_est"),
        Column::text("game_id"),
        Column::text("last_game_id"),
        Column::int("last_game_home_team_id"),
        Column::int("last_game_visitor_team_id"),
        Column::int("last_game_home_team_points"),
        Column::int("last_game_visitor_team_points"),
    ],
    primary_key: &["game_id"],
    unique: &[],
};

const CONFERENCE_STANDING_COLUMNS: &[Column] = &[
    Column::int("team_id"),
    Column::text("league_id"),
    Column::text("season_id"),
    Column::datetime("standingsdate"),
    Column::text("conference"),
    Column::text("team"),
    Column::int("g"),
    Column::int("w"),
    Column::int("l"),
    Column::real("w_pct"),
    Column::text("home_record"),
    Column::text("road_record"),
];

pub static EAST_STANDING_BY_DATE: TableSchema = TableSchema {
    name: "east_standing_by_date",
    columns: CONFERENCE_STANDING_COLUMNS,
    primary_key: &["standingsdate", "team_id"],
    unique: &[],
};

pub static WEST_STANDING_BY_DATE: TableSchema = TableSchema {
    name: "west_standing_by_date",
    columns: CONFERENCE_STANDING_COLUMNS,
    primary_key: &["standingsdate", "team_id"],
    unique: &[],
};

// =============================================================================
// Traditional box score (per game)
// =============================================================================

pub static PLAYER_STATS_BY_GAME: TableSchema = TableSchema {
    name: "player_stats_by_game",
    columns: &[
        Column::text("game_id"),
        Column::int("player_id"),
        Column::int("team_id"),
        Column::text("team_abbreviation"),
        Column::text("player_name"),
        Column::text("start_position"),
        Column::text("comment"),
        Column::text("min"),
        Column::int("fgm"),
        Column::int("fga"),
        Column::real("fg_pct"),
        Column::int("fg3m"),
        Column::int("fg3a"),
        Column::real("fg3_pct"),
        Column::int("ftm"),
        Column::int("fta"),
        Column::real("ft_pct"),
        Column::int("oreb"),
        Column::int("dreb"),
        Column::int("reb"),
        Column::int("ast"),
        Column::int("stl"),
        Column::int("blk"),
        Column::int("to"),
        Column::int("pf"),
        Column::int("pts"),
        Column::real("plus_minus"),
    ],
    primary_key: &["game_id", "player_id"],
    unique: &[],
};

pub static TEAM_STATS_BY_GAME: TableSchema = TableSchema {
    name: "team_stats_by_game",
    columns: &[
        Column::text("game_id"),
        Column::int("team_id"),
        Column::text("team_abbreviation"),
        Column::text("min"),
        Column::int("fgm"),
        Column::int("fga"),
        Column::real("fg_pct"),
        Column::int("fg3m"),
        Column::int("fg3a"),
        Column::real("fg3_pct"),
        Column::int("ftm"),
        Column::int("fta"),
        Column::real("ft_pct"),
        Column::int("oreb"),
        Column::int("dreb"),
        Column::int("reb"),
        Column::int("ast"),
        Column::int("stl"),
        Column::int("blk"),
        Column::int("to"),
        Column::int("pf"),
        Column::int("pts"),
        Column::real("plus_minus"),
    ],
    primary_key: &["game_id", "team_id"],
    unique: &[],
};

pub static TEAM_STARTER_BENCH_STATS_BY_GAME: TableSchema = TableSchema {
    name: "team_starter_bench_stats_by_game",
    columns: &[
        Column::text("game_id"),
        Column::int("team_id"),
        Column::text("starters_bench"),
        Column::text("min"),
        Column::int("fgm"),
        Column::int("fga"),
        Column::real("fg_pct"),
        Column::int("fg3m"),
        Column::int("fg3a"),
        Column::real("fg3_pct"),
        Column::int("ftm"),
        Column::int("fta"),
        Column::real("ft_pct"),
        Column::int("oreb"),
        Column::int("dreb"),
        Column::int("reb"),
        Column::int("ast"),
        Column::int("stl"),
        Column::int("blk"),
        Column::int("to"),
        Column::int("pf"),
        Column::int("pts"),
    ],
    primary_key: &["game_id", "team_id", "starters_bench"],
    unique: &[],
};

// =============================================================================
// Play-by-play actions (per game, one table per action kind)
// =============================================================================

const ACTION_KEY: &[&str] = &["game_id", "actionNumber"];

pub static PERIOD: TableSchema = TableSchema {
    name: "period",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::text("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::text("edited"),
        Column::int("orderNumber"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("side"),
        Column::text("description"),
        Column::text("personIdsFilter"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static JUMPBALL: TableSchema = TableSchema {
    name: "jumpball",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::text("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("descriptor"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::text("edited"),
        Column::int("orderNumber"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("jumpBallRecoveredName"),
        Column::int("jumpBallRecoverdPersonId"),
        Column::text("side"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
        Column::text("jumpBallWonPlayerName"),
        Column::int("jumpBallWonPersonId"),
        Column::text("description"),
        Column::text("jumpBallLostPlayerName"),
        Column::int("jumpBallLostPersonId"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static TURNOVER: TableSchema = TableSchema {
    name: "turnover",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::text("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::text("area"),
        Column::text("areaDetail"),
        Column::text("side"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::text("edited"),
        Column::int("orderNumber"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::int("isFieldGoal"),
        Column::int("turnoverTotal"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
        Column::text("stealPlayerName"),
        Column::int("stealPersonId"),
        Column::int("officialId"),
        Column::text("descriptor"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static STEAL: TableSchema = TableSchema {
    name: "steal",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::text("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::text("area"),
        Column::text("areaDetail"),
        Column::text("side"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::text("edited"),
        Column::int("orderNumber"),
        Column::text("subType"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::boolean("isFieldGoal"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
        Column::text("stealPlayerName"),
        Column::int("stealPersonId"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static TWO_POINT: TableSchema = TableSchema {
    name: "two_point",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::text("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("descriptor"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::text("area"),
        Column::text("areaDetail"),
        Column::text("side"),
        Column::real("shotDistance"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::text("edited"),
        Column::int("orderNumber"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::boolean("isFieldGoal"),
        Column::text("shotResult"),
        Column::int("pointsTotal"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
        Column::text("assistPlayerNameInitial"),
        Column::int("assistPersonId"),
        Column::int("assistTotal"),
        Column::text("blockPlayerName"),
        Column::int("blockPersonId"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static FOUL: TableSchema = TableSchema {
    name: "foul",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("descriptor"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::text("area"),
        Column::text("areaDetail"),
        Column::text("side"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("officialId"),
        Column::int("orderNumber"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::int("isFieldGoal"),
        Column::int("foulPersonalTotal"),
        Column::int("foulTechnicalTotal"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
        Column::text("foulDrawnPlayerName"),
        Column::int("foulDrawnPersonId"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static FREETHROW: TableSchema = TableSchema {
    name: "freethrow",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::text("side"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("orderNumber"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("shotResult"),
        Column::int("pointsTotal"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
        Column::text("descriptor"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static THREE_POINT: TableSchema = TableSchema {
    name: "threepoint",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::text("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::real("x"),
        Column::real("y"),
        Column::text("area"),
        Column::text("areaDetail"),
        Column::text("side"),
        Column::real("shotDistance"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::text("edited"),
        Column::int("orderNumber"),
        Column::real("xLegacy"),
        Column::real("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("shotResult"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
        Column::text("descriptor"),
        Column::int("pointsTotal"),
        Column::text("assistPlayerNameInitial"),
        Column::int("assistPersonId"),
        Column::int("assistTotal"),
        Column::text("blockPlayerName"),
        Column::int("blockPersonId"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static REBOUND: TableSchema = TableSchema {
    name: "rebound",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::text("x"),
        Column::text("y"),
        Column::text("area"),
        Column::text("areaDetail"),
        Column::text("side"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("orderNumber"),
        Column::text("xLegacy"),
        Column::text("yLegacy"),
        Column::int("isFieldGoal"),
        Column::int("shotActionNumber"),
        Column::int("reboundTotal"),
        Column::int("reboundDefensiveTotal"),
        Column::int("reboundOffensiveTotal"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static BLOCK: TableSchema = TableSchema {
    name: "block",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::text("x"),
        Column::text("y"),
        Column::text("area"),
        Column::text("areaDetail"),
        Column::text("side"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("orderNumber"),
        Column::text("xLegacy"),
        Column::text("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static TIMEOUT: TableSchema = TableSchema {
    name: "timeout",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::text("x"),
        Column::text("y"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("orderNumber"),
        Column::text("xLegacy"),
        Column::text("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("side"),
        Column::text("description"),
        Column::text("personIdsFilter"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static SUBSTITUTION: TableSchema = TableSchema {
    name: "substitution",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::int("x"),
        Column::int("y"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("orderNumber"),
        Column::int("xLegacy"),
        Column::int("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("side"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static VIOLATION: TableSchema = TableSchema {
    name: "violation",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::int("teamId"),
        Column::text("teamTricode"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::int("x"),
        Column::int("y"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("officialId"),
        Column::int("orderNumber"),
        Column::int("xLegacy"),
        Column::int("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("side"),
        Column::text("description"),
        Column::text("playerName"),
        Column::text("playerNameI"),
        Column::text("personIdsFilter"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

pub static GAME: TableSchema = TableSchema {
    name: "game",
    columns: &[
        Column::text("game_id"),
        Column::int("actionNumber"),
        Column::text("clock"),
        Column::datetime("timeActual"),
        Column::int("period"),
        Column::text("periodType"),
        Column::text("actionType"),
        Column::text("subType"),
        Column::text("qualifiers"),
        Column::int("personId"),
        Column::int("x"),
        Column::int("y"),
        Column::int("possession"),
        Column::text("scoreHome"),
        Column::text("scoreAway"),
        Column::datetime("edited"),
        Column::int("orderNumber"),
        Column::int("xLegacy"),
        Column::int("yLegacy"),
        Column::int("isFieldGoal"),
        Column::text("side"),
        Column::text("description"),
        Column::text("personIdsFilter"),
    ],
    primary_key: ACTION_KEY,
    unique: &[],
};

/// Every table the collector writes, in creation order.
pub static ALL_TABLES: [&TableSchema; 24] = [
    &TEAMS,
    &GAME_HEADERS,
    &GAME_LINE_SCORES,
    &GAME_SERIES_STANDINGS,
    &GAME_LAST_MEETING,
    &EAST_STANDING_BY_DATE,
    &WEST_STANDING_BY_DATE,
    &PLAYER_STATS_BY_GAME,
    &TEAM_STATS_BY_GAME,
    &TEAM_STARTER_BENCH_STATS_BY_GAME,
    &PERIOD,
    &JUMPBALL,
    &TURNOVER,
    &STEAL,
    &TWO_POINT,
    &FOUL,
    &FREETHROW,
    &THREE_POINT,
    &REBOUND,
    &BLOCK,
    &TIMEOUT,
    &SUBSTITUTION,
    &VIOLATION,
    &GAME,
];
