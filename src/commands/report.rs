//! Console output for collection runs and read queries.

use crate::{
    cli::types::PlayerId,
    storage::{CommitReport, PlayerName, ShotAttempt, StatsDatabase, TeamGame},
    Result,
};
use std::fmt::Write;

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// One line per commit report, plus a totals line.
pub fn render_commit_summary(reports: &[CommitReport]) -> String {
    let mut out = String::new();
    for r in reports {
        let _ = writeln!(
            out,
            "{:<34} {:>5} committed {:>5} failed",
            r.table,
            r.committed,
            r.failed()
        );
    }
    let committed: usize = reports.iter().map(|r| r.committed).sum();
    let failed: usize = reports.iter().map(CommitReport::failed).sum();
    let _ = write!(
        out,
        "Total: {committed} committed, {failed} failed across {} batches",
        reports.len()
    );
    out
}

pub fn render_players(players: &[PlayerName]) -> String {
    if players.is_empty() {
        return "No players found.".to_string();
    }
    let mut out = format!("{:<12} {}\n", "PLAYER_ID", "NAME");
    for p in players {
        let _ = writeln!(out, "{:<12} {}", p.player_id, p.player_name);
    }
    out.trim_end().to_string()
}

pub fn render_team_games(games: &[TeamGame]) -> String {
    if games.is_empty() {
        return "No team games found.".to_string();
    }
    let mut out = format!(
        "{:<12} {:<6} {:<5} {:>3} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>3}\n",
        "GAME_ID", "TEAM", "SIDE", "#", "PTS", "Q1", "Q2", "Q3", "Q4", "OT", "REB", "AST"
    );
    for g in games {
        let _ = writeln!(
            out,
            "{:<12} {:<6} {:<5} {:>3} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>3}",
            g.game_id,
            g.team_name.as_deref().unwrap_or("-"),
            g.home_or_away,
            g.game_number,
            or_dash(g.pts),
            or_dash(g.pts_qtr1),
            or_dash(g.pts_qtr2),
            or_dash(g.pts_qtr3),
            or_dash(g.pts_qtr4),
            g.pts_total_ot,
            or_dash(g.reb),
            or_dash(g.ast),
        );
    }
    out.trim_end().to_string()
}

pub fn render_shots(player_id: PlayerId, shots: &[ShotAttempt]) -> String {
    if shots.is_empty() {
        return format!("No shots found for player {player_id}.");
    }
    let made = shots
        .iter()
        .filter(|s| s.shot_result.as_deref() == Some("Made"))
        .count();
    let mut out = format!(
        "{} ({player_id}): {made}/{} made\n",
        shots[0].player_name,
        shots.len()
    );
    for s in shots {
        let _ = writeln!(
            out,
            "  x={:>7} y={:>7} {}",
            or_dash(s.loc_x),
            or_dash(s.loc_y),
            s.shot_result.as_deref().unwrap_or("-")
        );
    }
    out.trim_end().to_string()
}

/// Print the commit outcome of a store command.
pub fn handle_commit_summary(reports: &[CommitReport], as_json: bool) -> Result<()> {
    if as_json {
        let summary: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| {
                serde_json::json!({
                    "table": r.table,
                    "attempted": r.attempted,
                    "committed": r.committed,
                    "failed": r.failed(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_commit_summary(reports));
    }
    Ok(())
}

pub fn handle_show_players(db: &StatsDatabase, as_json: bool) -> Result<()> {
    let players = db.player_id_map()?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
    } else {
        println!("{}", render_players(&players));
    }
    Ok(())
}

pub fn handle_show_team_games(db: &StatsDatabase, as_json: bool) -> Result<()> {
    let games = db.team_games()?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&games)?);
    } else {
        println!("{}", render_team_games(&games));
    }
    Ok(())
}

pub fn handle_show_shots(db: &StatsDatabase, player_id: PlayerId, as_json: bool) -> Result<()> {
    let shots = db.shot_chart(player_id)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&shots)?);
    } else {
        println!("{}", render_shots(player_id, &shots));
    }
    Ok(())
}
