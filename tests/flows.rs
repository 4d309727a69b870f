mod common;

use std::time::Duration;

use climate_odds::{
    app::{
        events::AppEvent,
        state::{AppMode, AppState},
    },
    domain::trends::TrendMetric,
};
use common::{ANALYSIS_BODY, ARACAJU_SEARCH_BODY, fixed_date, mock_cli, results_state, test_cli};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn press(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, code: KeyCode) {
    state
        .handle_event(
            AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
            tx,
        )
        .await
        .unwrap();
}

async fn type_text(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, text: &str) {
    for ch in text.chars() {
        press(state, tx, KeyCode::Char(ch)).await;
    }
}

/// Feeds the next background event back into the state, as the main loop does.
async fn pump(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, rx: &mut mpsc::Receiver<AppEvent>) {
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("background event in time")
        .expect("channel open");
    state.handle_event(event, tx).await.unwrap();
}

async fn mount_analysis(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn flow_search_reaches_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Aracaju"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(ARACAJU_SEARCH_BODY, "application/json"),
        )
        .mount(&server)
        .await;
    mount_analysis(
        &server,
        ResponseTemplate::new(200).set_body_raw(ANALYSIS_BODY, "application/json"),
    )
    .await;

    let cli = mock_cli(&server.uri());
    let mut state = AppState::with_today(&cli, fixed_date());
    let (tx, mut rx) = mpsc::channel(16);

    type_text(&mut state, &tx, "Aracaju").await;
    press(&mut state, &tx, KeyCode::Enter).await;
    assert_eq!(state.mode, AppMode::Loading);
    assert!(state.search_in_flight());

    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Results);
    let report = state.report.as_ref().expect("report");
    assert_eq!(report.location.name, "Aracaju");
    assert_eq!(report.date, fixed_date());
    assert_eq!(report.odds.based_on_years, Some(20));
}

#[tokio::test]
async fn flow_ambiguous_search_selects_second_candidate() {
    let server = MockServer::start().await;
    let body = r#"
    {
      "results": [
        {"name": "Springfield", "latitude": 39.799, "longitude": -89.644, "country_code": "US", "admin1": "Illinois", "population": 115000},
        {"name": "Springfield", "latitude": 44.046, "longitude": -123.022, "country_code": "US", "admin1": "Oregon", "population": 112000}
      ]
    }
    "#;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;
    mount_analysis(
        &server,
        ResponseTemplate::new(200).set_body_raw(ANALYSIS_BODY, "application/json"),
    )
    .await;

    let cli = mock_cli(&server.uri());
    let mut state = AppState::with_today(&cli, fixed_date());
    let (tx, mut rx) = mpsc::channel(16);

    type_text(&mut state, &tx, "Springfield").await;
    press(&mut state, &tx, KeyCode::Enter).await;
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::SelectingLocation);
    assert_eq!(state.pending_locations.len(), 2);

    press(&mut state, &tx, KeyCode::Char('2')).await;
    assert_eq!(state.mode, AppMode::Loading);
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Results);
    let report = state.report.as_ref().expect("report");
    assert_eq!(report.location.admin1.as_deref(), Some("Oregon"));
}

#[tokio::test]
async fn flow_service_failure_shows_error_then_resets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(ARACAJU_SEARCH_BODY, "application/json"),
        )
        .mount(&server)
        .await;
    mount_analysis(
        &server,
        ResponseTemplate::new(503)
            .set_body_raw(r#"{"error": "API rate limit exceeded."}"#, "application/json"),
    )
    .await;

    let cli = mock_cli(&server.uri());
    let mut state = AppState::with_today(&cli, fixed_date());
    let (tx, mut rx) = mpsc::channel(16);

    type_text(&mut state, &tx, "Aracaju").await;
    press(&mut state, &tx, KeyCode::Enter).await;
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(state.last_error.as_deref(), Some("API rate limit exceeded."));

    press(&mut state, &tx, KeyCode::Enter).await;
    assert_eq!(state.mode, AppMode::Search);
    assert!(state.last_error.is_none());
    assert_eq!(state.form.location, "Aracaju");
}

#[tokio::test]
async fn flow_results_cycle_trend_metric() {
    let cli = test_cli();
    let mut state = results_state(&cli);
    let (tx, _rx) = mpsc::channel(8);

    let mut seen = vec![state.trend_metric];
    for _ in 0..4 {
        press(&mut state, &tx, KeyCode::Char('t')).await;
        seen.push(state.trend_metric);
    }

    assert_eq!(
        seen,
        vec![
            TrendMetric::Temperature,
            TrendMetric::Humidity,
            TrendMetric::Rain,
            TrendMetric::Wind,
            TrendMetric::Temperature,
        ]
    );
}

#[tokio::test]
async fn flow_reshuffle_keeps_recommendations_eligible() {
    let cli = test_cli();
    let mut state = results_state(&cli);
    let (tx, _rx) = mpsc::channel(8);
    let before = state.report.as_ref().expect("report").recommendations.len();

    for _ in 0..10 {
        press(&mut state, &tx, KeyCode::Char('r')).await;
        let report = state.report.as_ref().expect("report");
        assert_eq!(report.recommendations.len(), before);
        let mut ids: Vec<_> = report.recommendations.iter().map(|rec| rec.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
    assert_eq!(state.mode, AppMode::Results);
}

#[tokio::test]
async fn flow_new_search_returns_to_empty_form() {
    let cli = test_cli();
    let mut state = results_state(&cli);
    let (tx, _rx) = mpsc::channel(8);

    press(&mut state, &tx, KeyCode::Char('n')).await;

    assert_eq!(state.mode, AppMode::Search);
    assert!(state.report.is_none());
}
