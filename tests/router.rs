use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use matchup_board::{router, AppState};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tower::util::ServiceExt;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/weekly_matchups.json")
}

fn app_for(path: PathBuf) -> axum::Router {
    router(AppState::new(path, chrono_tz::America::New_York))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn full_page_lists_every_matchup() {
    let (status, content_type, body) = get(app_for(fixture_path()), "/?day_matchup_0=8").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("Matchup #1"));
    assert!(body.contains("Matchup #2"));
    assert!(body.contains("Splash Bros"));
    assert!(body.contains("Fast Break"));
    assert!(body.contains(r#"<option value="8" selected>Day 2 - 2025-01-06</option>"#));
    assert!(body.contains("Projected Total: 30.5"));
    assert!(body.contains("S. Gilgeous-Alexander"));
}

#[tokio::test]
async fn ajax_fragment_wraps_tables_in_json() {
    let (status, content_type, body) = get(
        app_for(fixture_path()),
        "/?ajax=1&matchupId=matchup_0&day=8",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));
    let json: Value = serde_json::from_str(&body).unwrap();
    let html = json["html"].as_str().expect("html field");

    assert!(html.contains(r#"<tr><td class="points-col">-</td><td>12.3</td>"#));
    assert!(html.contains(r#"<span class="injury-tag questionable">Q</span>"#));
    assert!(html.contains(r#"<span class="injury-tag dtd">DTD</span>"#));
    assert!(html.contains(r#"<tr class="ir-row">"#));
    assert!(html.contains(
        "<td><strong>15</strong></td><td><strong>30.5</strong></td><td></td><td><strong>Day Total</strong></td>"
    ));
    assert!(html.contains(
        "<td><strong>Day Total</strong></td><td></td><td><strong>30.1</strong></td><td><strong>22.5</strong></td>"
    ));
}

#[tokio::test]
async fn ajax_fragment_for_day_without_data_shows_placeholder() {
    let (status, _, body) = get(
        app_for(fixture_path()),
        "/?ajax=1&matchupId=matchup_0&day=9",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let html = json["html"].as_str().unwrap();
    assert_eq!(html.matches("No data for this day").count(), 1);
    assert!(html.contains(
        "<td><strong>Day Total</strong></td><td></td><td><strong>0.0</strong></td><td><strong>0</strong></td>"
    ));
}

#[tokio::test]
async fn ajax_fragment_for_unknown_matchup_is_404() {
    let (status, _, body) = get(
        app_for(fixture_path()),
        "/?ajax=1&matchupId=matchup_42&day=8",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("matchup_42"));
}

#[tokio::test]
async fn structured_day_endpoint_reports_rows_and_totals() {
    let (status, _, body) = get(app_for(fixture_path()), "/api/matchups/matchup_0/days/8").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["matchup_id"], "matchup_0");
    assert_eq!(json["day"], 8);

    let home = &json["team1"];
    assert_eq!(home["totals"]["points"], 15.0);
    assert_eq!(home["rows"].as_array().unwrap().len(), 13);
    assert_eq!(home["rows"][0]["kind"], "slot");
    assert_eq!(home["rows"][0]["position"], "PG");
    assert_eq!(home["rows"][0]["projection"]["state"], "scheduled");
    assert_eq!(home["rows"][0]["points"]["state"], "pending");
    assert_eq!(home["rows"][3]["projection"]["state"], "live");

    let away = &json["team2"];
    assert_eq!(away["totals"]["points"], 22.5);
}

#[tokio::test]
async fn structured_day_endpoint_handles_bad_input() {
    let (status, _, _) = get(app_for(fixture_path()), "/api/matchups/nope/days/8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = get(app_for(fixture_path()), "/api/matchups/matchup_0/days/soon").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["day"], Value::Null);
    assert_eq!(json["team1"]["rows"][0]["kind"], "no_data");
    assert_eq!(json["team1"]["totals"]["projection"], 0.0);
}

#[tokio::test]
async fn broken_snapshot_fails_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, body) = get(app_for(dir.path().join("missing.json")), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("failed to read snapshot"));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "[1, 2").unwrap();
    let (status, _, body) = get(app_for(broken), "/?ajax=1&matchupId=matchup_0&day=8").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("failed to parse snapshot"));
}

#[tokio::test]
async fn healthz_does_not_touch_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, body) = get(app_for(dir.path().join("missing.json")), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
