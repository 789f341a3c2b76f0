//! Unit tests for HTTP client functionality

use super::*;
use crate::error::StatsError;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> NbaClient {
    let base = server.uri();
    NbaClient::with_base_urls(&format!("{base}/stats"), &format!("{base}/live")).unwrap()
}

#[test]
fn test_stats_header_map_has_origin_headers() {
    let headers = stats_header_map().unwrap();
    assert!(headers.contains_key(USER_AGENT));
    assert!(headers.contains_key(REFERER));
    assert_eq!(headers["x-nba-stats-origin"], "stats");
    assert_eq!(headers["x-nba-stats-token"], "true");
}

#[test]
fn test_base_urls_are_trimmed() {
    let client = NbaClient::with_base_urls("http://a/stats/", "http://b/live/").unwrap();
    assert_eq!(client.stats_base_url, "http://a/stats");
    assert_eq!(client.live_base_url, "http://b/live");
}

#[tokio::test]
async fn test_scoreboard_success() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "resource": "scoreboard",
        "resultSets": [
            {"name": "GameHeader", "headers": ["GAME_ID", "GAME_STATUS_ID"],
             "rowSet": [["0022300001", 3]]},
            {"name": "LineScore", "headers": ["GAME_ID", "TEAM_ID"], "rowSet": []}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/stats/scoreboard"))
        .and(query_param("DayOffset", "-1"))
        .and(query_param("LeagueID", "00"))
        .and(header("x-nba-stats-token", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let sets = client.scoreboard(DayOffset::yesterday()).await.unwrap();

    assert_eq!(sets.len(), 2);
    let row = sets.rows(0).unwrap().next().unwrap();
    assert_eq!(row["game_id"], json!("0022300001"));
    assert_eq!(row["game_status_id"], json!(3));
}

#[tokio::test]
async fn test_box_score_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/boxscoretraditionalv2"))
        .and(query_param("GameID", "0022300001"))
        .and(query_param("RangeType", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [
                {"name": "PlayerStats", "headers": ["GAME_ID", "PLAYER_ID"], "rowSet": []},
                {"name": "TeamStats", "headers": ["GAME_ID", "TEAM_ID"], "rowSet": []},
                {"name": "TeamStarterBenchStats", "headers": ["GAME_ID"], "rowSet": []}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let sets = client.box_score(&GameId::new("0022300001")).await.unwrap();
    assert_eq!(sets.len(), 3);
    assert_eq!(sets.get(2).unwrap().name, "TeamStarterBenchStats");
}

#[tokio::test]
async fn test_play_by_play_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live/playbyplay/playbyplay_0022300001.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"code": 200},
            "game": {
                "gameId": "0022300001",
                "actions": [
                    {"actionNumber": 1, "actionType": "period", "subType": "start"},
                    {"actionNumber": 2, "actionType": "jumpball"}
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let actions = client
        .play_by_play(&GameId::new("0022300001"))
        .await
        .unwrap();

    assert_eq!(actions.len(), 2);
    assert_eq!(actions[1]["actionType"], json!("jumpball"));
}

#[tokio::test]
async fn test_http_error_status_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/boxscoretraditionalv2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.box_score(&GameId::new("0022300009")).await;

    match result {
        Err(StatsError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(500)),
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "nope"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.scoreboard(DayOffset::default()).await.is_err());
}
