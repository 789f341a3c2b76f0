//! Unit tests for result-set adaptation

use super::*;
use serde_json::json;

fn line_score() -> ResultSet {
    serde_json::from_value(json!({
        "name": "LineScore",
        "headers": ["GAME_ID", "TEAM_ID", "TEAM_ABBREVIATION", "PTS"],
        "rowSet": [
            ["0022300001", 1610612743, "DEN", 119],
            ["0022300001", 1610612747, "LAL", 107]
        ]
    }))
    .unwrap()
}

#[test]
fn test_rows_lowercase_keys_in_source_order() {
    let set = line_score();
    let rows: Vec<RowMap> = set.rows().unwrap().collect();

    assert_eq!(rows.len(), 2);
    let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["game_id", "team_id", "team_abbreviation", "pts"]);
    assert_eq!(rows[0]["team_abbreviation"], json!("DEN"));
    assert_eq!(rows[1]["team_abbreviation"], json!("LAL"));
}

#[test]
fn test_rows_pass_values_through_untyped() {
    let set: ResultSet = serde_json::from_value(json!({
        "name": "GameHeader",
        "headers": ["GAME_ID", "LIVE_PC_TIME", "FG_PCT"],
        "rowSet": [["0022300002", null, 0.512]]
    }))
    .unwrap();

    let row = set.rows().unwrap().next().unwrap();
    assert_eq!(row["live_pc_time"], Value::Null);
    assert_eq!(row["fg_pct"], json!(0.512));
}

#[test]
fn test_rows_is_exact_size() {
    let set = line_score();
    assert_eq!(set.rows().unwrap().len(), 2);
}

#[test]
fn test_rows_rejects_ragged_rows() {
    let set: ResultSet = serde_json::from_value(json!({
        "name": "PlayerStats",
        "headers": ["GAME_ID", "PLAYER_ID"],
        "rowSet": [["0022300001", 2544], ["0022300001"]]
    }))
    .unwrap();

    match set.rows() {
        Err(StatsError::MalformedResultSet { name, .. }) => assert_eq!(name, "PlayerStats"),
        Err(other) => panic!("Expected MalformedResultSet, got {other:?}"),
        Ok(_) => panic!("Expected MalformedResultSet, got rows"),
    }
}

#[test]
fn test_result_sets_index_out_of_range() {
    let sets = ResultSets::new(vec![line_score()]);
    assert!(sets.rows(0).is_ok());
    match sets.rows(3) {
        Err(StatsError::ResultSetOutOfRange { index, available }) => {
            assert_eq!(index, 3);
            assert_eq!(available, 1);
        }
        Err(other) => panic!("Expected ResultSetOutOfRange, got {other:?}"),
        Ok(_) => panic!("Expected ResultSetOutOfRange, got rows"),
    }
}

#[test]
fn test_empty_result_set_yields_nothing() {
    let set: ResultSet = serde_json::from_value(json!({
        "name": "PlayerStats",
        "headers": ["GAME_ID", "PLAYER_ID"],
        "rowSet": []
    }))
    .unwrap();
    assert_eq!(set.rows().unwrap().count(), 0);
}

#[test]
fn test_stats_envelope_deserializes() {
    let envelope: StatsEnvelope = serde_json::from_value(json!({
        "resource": "scoreboard",
        "parameters": {"DayOffset": -1},
        "resultSets": [
            {"name": "GameHeader", "headers": ["GAME_ID"], "rowSet": [["0022300001"]]}
        ]
    }))
    .unwrap();
    assert_eq!(envelope.result_sets.len(), 1);
    assert_eq!(envelope.result_sets[0].name, "GameHeader");
}

#[test]
fn test_play_by_play_envelope_keeps_action_fields() {
    let envelope: PlayByPlayEnvelope = serde_json::from_value(json!({
        "meta": {"version": 1},
        "game": {
            "gameId": "0022300001",
            "actions": [
                {"actionNumber": 4, "clock": "PT12M00.00S", "actionType": "jumpball"}
            ]
        }
    }))
    .unwrap();
    let keys: Vec<&str> = envelope.game.actions[0]
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["actionNumber", "clock", "actionType"]);
}
