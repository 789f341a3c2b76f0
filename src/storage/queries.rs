//! Read queries the dashboard runs against collected data

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::PlayerId;
use crate::error::Result;
use rusqlite::params;

impl StatsDatabase {
    /// Distinct players seen in any box score, by name
    pub fn player_id_map(&self) -> Result<Vec<PlayerName>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT player_id, player_name
             FROM player_stats_by_game
             WHERE player_name IS NOT NULL
             ORDER BY player_name, player_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PlayerName {
                player_id: row.get(0)?,
                player_name: row.get(1)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// One line per team per game: home/away, running counts, box-score totals
    /// and line-score quarters.
    pub fn team_games(&self) -> Result<Vec<TeamGame>> {
        let mut stmt = self.conn.prepare(
            "WITH all_teams_in_games AS (
                SELECT game_date_est, game_id, home_team_id AS team_id, 'home' AS home_or_away
                FROM game_headers
                UNION
                SELECT game_date_est, game_id, visitor_team_id AS team_id, 'away' AS home_or_away
                FROM game_headers
             )
             SELECT g.game_date_est,
                    g.game_id,
                    g.team_id,
                    g.home_or_away,
                    ROW_NUMBER() OVER (PARTITION BY g.team_id ORDER BY g.game_date_est) AS game_number,
                    SUM(CASE WHEN g.home_or_away = 'home' THEN 1 ELSE 0 END)
                        OVER (PARTITION BY g.team_id ORDER BY g.game_date_est
                              ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW) AS home_games_count,
                    SUM(CASE WHEN g.home_or_away = 'away' THEN 1 ELSE 0 END)
                        OVER (PARTITION BY g.team_id ORDER BY g.game_date_est
                              ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW) AS away_games_count,
                    t.fgm, t.fga, t.fg_pct, t.fg3m, t.fg3a, t.fg3_pct,
                    t.ftm, t.fta, t.ft_pct, t.oreb, t.dreb, t.reb,
                    t.ast, t.stl, t.blk, t.\"to\", t.pf, t.pts, t.plus_minus,
                    l.team_abbreviation AS team_name,
                    l.pts_qtr1, l.pts_qtr2, l.pts_qtr3, l.pts_qtr4,
                    COALESCE(l.pts_ot1, 0) + COALESCE(l.pts_ot2, 0) + COALESCE(l.pts_ot3, 0)
                      + COALESCE(l.pts_ot4, 0) + COALESCE(l.pts_ot5, 0) + COALESCE(l.pts_ot6, 0)
                      + COALESCE(l.pts_ot7, 0) + COALESCE(l.pts_ot8, 0) + COALESCE(l.pts_ot9, 0)
                      + COALESCE(l.pts_ot10, 0) AS pts_total_ot
             FROM all_teams_in_games g
             JOIN team_stats_by_game t
               ON t.game_id = g.game_id AND t.team_id = g.team_id
             JOIN game_line_scores l
               ON l.game_id = g.game_id AND l.team_id = g.team_id
             ORDER BY g.team_id, game_number",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TeamGame {
                game_date_est: row.get(0)?,
                game_id: row.get(1)?,
                team_id: row.get(2)?,
                home_or_away: row.get(3)?,
                game_number: row.get(4)?,
                home_games_count: row.get(5)?,
                away_games_count: row.get(6)?,
                fgm: row.get(7)?,
                fga: row.get(8)?,
                fg_pct: row.get(9)?,
                fg3m: row.get(10)?,
                fg3a: row.get(11)?,
                fg3_pct: row.get(12)?,
                ftm: row.get(13)?,
                fta: row.get(14)?,
                ft_pct: row.get(15)?,
                oreb: row.get(16)?,
                dreb: row.get(17)?,
                reb: row.get(18)?,
                ast: row.get(19)?,
                stl: row.get(20)?,
                blk: row.get(21)?,
                to: row.get(22)?,
                pf: row.get(23)?,
                pts: row.get(24)?,
                plus_minus: row.get(25)?,
                team_name: row.get(26)?,
                pts_qtr1: row.get(27)?,
                pts_qtr2: row.get(28)?,
                pts_qtr3: row.get(29)?,
                pts_qtr4: row.get(30)?,
                pts_total_ot: row.get(31)?,
            })
        })?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Every two- and three-point attempt by one player
    pub fn shot_chart(&self, player_id: PlayerId) -> Result<Vec<ShotAttempt>> {
        let mut stmt = self.conn.prepare(
            "WITH all_shots AS (
                SELECT \"personId\" AS player_id, x, y, \"shotResult\" AS shot_result,
                       game_id, \"actionNumber\" AS action_number
                FROM two_point
                UNION ALL
                SELECT \"personId\" AS player_id, x, y, \"shotResult\" AS shot_result,
                       game_id, \"actionNumber\" AS action_number
                FROM threepoint
             ),
             player_id_map AS (
                SELECT DISTINCT player_id, player_name
                FROM player_stats_by_game
             )
             SELECT s.player_id, s.x, s.y, s.shot_result, p.player_name
             FROM all_shots s
             JOIN player_id_map p ON p.player_id = s.player_id
             WHERE s.player_id = ?
             ORDER BY s.game_id, s.action_number",
        )?;

        let rows = stmt.query_map(params![player_id.as_i64()], |row| {
            Ok(ShotAttempt {
                player_id: row.get(0)?,
                loc_x: row.get(1)?,
                loc_y: row.get(2)?,
                shot_result: row.get(3)?,
                player_name: row.get(4)?,
            })
        })?;

        let mut shots = Vec::new();
        for row in rows {
            shots.push(row?);
        }
        Ok(shots)
    }
}
