//! HTTP tests for the dashboard API: start, score, finish and the ranked summary.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use live_scoreboard::dashboard::{self, AppState, SummaryResponse};
use live_scoreboard::scoreboard::{load_seed, Match, Scoreboard, SequentialIds};
use live_scoreboard::service::ScoreboardService;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tower::util::ServiceExt; // for oneshot

const FIXTURE: &str = r#"[
    {"id":"1","home":{"name":"Mexico","score":0},"away":{"name":"Canada","score":5}},
    {"id":"2","home":{"name":"Poland","score":10},"away":{"name":"Ecuador","score":2}},
    {"id":"3","home":{"name":"Portugal","score":2},"away":{"name":"Chile","score":2}}
]"#;

fn setup_app(initial: Vec<Match>) -> Router {
    let last_id = initial.len() as u64;
    let board = Scoreboard::new(initial).with_ids(Arc::new(SequentialIds::starting_after(last_id)));
    dashboard::router(AppState {
        service: ScoreboardService::new(board),
    })
}

fn fixture() -> Vec<Match> {
    serde_json::from_str(FIXTURE).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_string(&v).unwrap())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn summary(app: &Router) -> Vec<Match> {
    let (status, body) = send(app, "GET", "/api/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    let parsed: SummaryResponse = serde_json::from_slice(&body).unwrap();
    parsed.matches
}

fn homes(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.home.name.as_str()).collect()
}

#[tokio::test]
async fn test_index_serves_dashboard() {
    let app = setup_app(Vec::new());
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Add Game"));
    assert!(html.contains("game-summary"));
}

#[tokio::test]
async fn test_start_three_games() {
    let app = setup_app(Vec::new());
    for k in 0..3 {
        let (status, _) = send(
            &app,
            "POST",
            "/api/matches",
            Some(json!({ "home": format!("home{k}"), "away": format!("away{k}") })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    assert_eq!(summary(&app).await.len(), 3);
}

#[tokio::test]
async fn test_start_game_returns_new_match() {
    let app = setup_app(Vec::new());
    let (status, body) = send(
        &app,
        "POST",
        "/api/matches",
        Some(json!({ "home": "A", "away": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let m: Match = serde_json::from_slice(&body).unwrap();
    assert_eq!(m.id, "1");
    assert_eq!((m.home.score, m.away.score), (0, 0));
}

#[tokio::test]
async fn test_same_team_twice_is_rejected() {
    let app = setup_app(Vec::new());
    let payload = json!({ "home": "a", "away": "b" });
    send(&app, "POST", "/api/matches", Some(payload.clone())).await;
    let (status, body) = send(&app, "POST", "/api/matches", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, b"One of the teams is already playing");
    assert_eq!(summary(&app).await.len(), 1);
}

#[tokio::test]
async fn test_missing_names_are_rejected() {
    let app = setup_app(Vec::new());
    let (status, body) = send(
        &app,
        "POST",
        "/api/matches",
        Some(json!({ "home": "", "away": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, b"Please enter both team names");
    assert!(summary(&app).await.is_empty());
}

#[tokio::test]
async fn test_home_scores_twice_away_once() {
    let app = setup_app(Vec::new());
    send(&app, "POST", "/api/matches", Some(json!({ "home": "home", "away": "away" }))).await;
    for side in ["home", "home", "away"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/matches/1/score",
            Some(json!({ "side": side })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let games = summary(&app).await;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].to_string(), "home 2-1 away");
}

#[tokio::test]
async fn test_add_points_reorders_summary() {
    let app = setup_app(fixture());
    let (status, body) = send(
        &app,
        "POST",
        "/api/matches/3/points",
        Some(json!({ "side": "away", "points": 20 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let m: Match = serde_json::from_slice(&body).unwrap();
    assert_eq!(m.away.score, 22);
    assert_eq!(homes(&summary(&app).await), vec!["Portugal", "Poland", "Mexico"]);
}

#[tokio::test]
async fn test_finish_game_removes_it() {
    let app = setup_app(Vec::new());
    send(&app, "POST", "/api/matches", Some(json!({ "home": "home", "away": "away" }))).await;
    assert_eq!(summary(&app).await.len(), 1);

    let (status, _) = send(&app, "DELETE", "/api/matches/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(summary(&app).await.is_empty());
}

#[tokio::test]
async fn test_unknown_match_is_not_found() {
    let app = setup_app(fixture());
    let (status, _) = send(&app, "DELETE", "/api/matches/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        "POST",
        "/api/matches/nonexistent/score",
        Some(json!({ "side": "home" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(summary(&app).await, Scoreboard::new(fixture()).summary());
}

#[tokio::test]
async fn test_invalid_side_is_rejected() {
    let app = setup_app(fixture());
    let (status, _) = send(
        &app,
        "POST",
        "/api/matches/1/score",
        Some(json!({ "side": "middle" })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_summary_in_score_order() {
    let app = setup_app(fixture());
    let games = summary(&app).await;
    let lines: Vec<String> = games.iter().map(|m| m.to_string()).collect();
    assert_eq!(
        lines,
        vec!["Poland 10-2 Ecuador", "Mexico 0-5 Canada", "Portugal 2-2 Chile"]
    );
}

#[tokio::test]
async fn test_summary_ties_most_recent_first() {
    let mut games = fixture();
    games.extend(
        serde_json::from_value::<Vec<Match>>(json!([
            {"id":"4","home":{"name":"Uruguay","score":6},"away":{"name":"Italy","score":6}},
            {"id":"5","home":{"name":"Argentina","score":6},"away":{"name":"Australia","score":6}}
        ]))
        .unwrap(),
    );
    let app = setup_app(games);
    assert_eq!(
        homes(&summary(&app).await),
        vec!["Argentina", "Uruguay", "Poland", "Mexico", "Portugal"]
    );
}

#[tokio::test]
async fn test_seed_file_feeds_dashboard() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    let app = setup_app(load_seed(file.path()).unwrap());
    assert_eq!(homes(&summary(&app).await), vec!["Poland", "Mexico", "Portugal"]);
}
