//! End-to-end collection against a mocked NBA API

use nba_stats::{commands::Collector, nba::NbaClient, storage::StatsDatabase, DayOffset, PlayerId};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_game_day(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/stats/scoreboard"))
        .and(query_param("DayOffset", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [
                {"name": "GameHeader",
                 "headers": ["GAME_DATE_EST", "GAME_ID", "GAME_STATUS_ID", "HOME_TEAM_ID", "VISITOR_TEAM_ID"],
                 "rowSet": [["2023-10-24T00:00:00", "0022300001", 3, 1610612743, 1610612747]]},
                {"name": "LineScore",
                 "headers": ["GAME_ID", "TEAM_ID", "TEAM_ABBREVIATION", "PTS_QTR1", "PTS_QTR2", "PTS_QTR3", "PTS_QTR4"],
                 "rowSet": [["0022300001", 1610612743, "DEN", 30, 29, 31, 29],
                            ["0022300001", 1610612747, "LAL", 21, 30, 28, 28]]},
                {"name": "SeriesStandings", "headers": ["GAME_ID"], "rowSet": []},
                {"name": "LastMeeting", "headers": ["GAME_ID"], "rowSet": []},
                {"name": "EastConfStandingsByDay", "headers": ["TEAM_ID", "STANDINGSDATE"], "rowSet": []},
                {"name": "WestConfStandingsByDay",
                 "headers": ["TEAM_ID", "STANDINGSDATE", "TEAM", "W", "L", "W_PCT"],
                 "rowSet": [[1610612743, "10/24/2023", "Denver", 1, 0, 1.0]]}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stats/boxscoretraditionalv2"))
        .and(query_param("GameID", "0022300001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [
                {"name": "PlayerStats",
                 "headers": ["GAME_ID", "TEAM_ID", "PLAYER_ID", "PLAYER_NAME", "PTS"],
                 "rowSet": [["0022300001", 1610612743, 203999, "Nikola Jokic", 29]]},
                {"name": "TeamStats",
                 "headers": ["GAME_ID", "TEAM_ID", "PTS", "REB", "AST", "TO"],
                 "rowSet": [["0022300001", 1610612743, 119, 53, 29, 12],
                            ["0022300001", 1610612747, 107, 42, 21, 15]]},
                {"name": "TeamStarterBenchStats",
                 "headers": ["GAME_ID", "TEAM_ID", "STARTERS_BENCH", "PTS"],
                 "rowSet": []}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/live/playbyplay/playbyplay_0022300001.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "game": {
                "gameId": "0022300001",
                "actions": [
                    {"actionNumber": 4, "actionType": "2pt", "personId": 203999,
                     "x": 5.0, "y": 48.0, "shotResult": "Made", "qualifiers": ["pointsinthepaint"]},
                    {"actionNumber": 9, "actionType": "3pt", "personId": 203999,
                     "x": 30.5, "y": 10.0, "shotResult": "Missed"}
                ]
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_daily_run_then_play_by_play_feeds_queries() {
    let server = MockServer::start().await;
    mount_game_day(&server).await;

    let dir = TempDir::new().unwrap();
    let db = StatsDatabase::open_path(dir.path().join("stats.db")).unwrap();
    let base = server.uri();
    let client =
        NbaClient::with_base_urls(&format!("{base}/stats"), &format!("{base}/live")).unwrap();
    let mut collector = Collector::new(client, db, DayOffset::yesterday());

    let daily = collector.run_daily().await.unwrap();
    assert_eq!(daily.len(), 9);
    assert!(daily.iter().all(|r| r.failed() == 0));

    let pbp = collector.store_playbyplay_data().await.unwrap();
    assert_eq!(pbp.iter().map(|r| r.committed).sum::<usize>(), 2);

    let db = collector.into_database();
    assert_eq!(db.count_rows("west_standing_by_date").unwrap(), 1);

    let games = db.team_games().unwrap();
    assert_eq!(games.len(), 2);
    let den = games.iter().find(|g| g.team_id == 1610612743).unwrap();
    assert_eq!(den.home_or_away, "home");
    assert_eq!(den.pts, Some(119));
    assert_eq!(den.to, Some(12));
    assert_eq!(den.team_name.as_deref(), Some("DEN"));

    let shots = db.shot_chart(PlayerId::new(203999)).unwrap();
    assert_eq!(shots.len(), 2);
    assert!(shots.iter().all(|s| s.player_name == "Nikola Jokic"));
}

#[tokio::test]
async fn test_scoreboard_outage_fails_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/scoreboard"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let base = server.uri();
    let client =
        NbaClient::with_base_urls(&format!("{base}/stats"), &format!("{base}/live")).unwrap();
    let db = StatsDatabase::open_in_memory().unwrap();
    let mut collector = Collector::new(client, db, DayOffset::yesterday());

    assert!(collector.run_daily().await.is_err());
    assert_eq!(collector.database().count_rows("game_headers").unwrap(), 0);
}
