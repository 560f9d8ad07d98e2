// src/services/selection_service_tests.rs
//
// Selection state machine and bootstrap behaviour.

use chrono::Datelike;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::application::error_handling::ErrorNormalizer;
use crate::application::notifier::MockNotifier;
use crate::domain::Season;
use crate::error::{ApiError, TransportError};
use crate::integrations::http::MockTransport;
use crate::services::selection_service::{
    year_options_until, MockLatestPeriodSource, SelectionService, SelectionState,
    EARLIEST_YEAR,
};

// ========================================================================
// TEST HELPERS
// ========================================================================

fn this_year() -> i32 {
    chrono::Local::now().year()
}

fn service_with(source: MockLatestPeriodSource) -> SelectionService {
    SelectionService::new(Arc::new(source))
}

/// Source that must never be asked.
fn unused_source() -> MockLatestPeriodSource {
    let mut source = MockLatestPeriodSource::new();
    source.expect_latest_period().never();
    source
}

fn source_returning(value: Result<Option<&'static str>, ApiError>) -> MockLatestPeriodSource {
    let mut source = MockLatestPeriodSource::new();
    source
        .expect_latest_period()
        .times(1)
        .returning(move || value.clone().map(|v| v.map(str::to_string)));
    source
}

fn state(year: Option<i32>, season: Option<&str>) -> SelectionState {
    SelectionState {
        selected_year: year,
        selected_season: season.map(str::to_string),
        ..Default::default()
    }
}

// ========================================================================
// TRANSITIONS
// ========================================================================

#[test]
fn test_initial_state() {
    let service = service_with(unused_source());
    assert_eq!(service.state(), SelectionState::default());
    assert!(!service.is_initialized());
    assert_eq!(service.calendar_season(), None);
}

#[test]
fn test_clearing_year_clears_season() {
    let service = service_with(unused_source());
    service.set_year(Some(2024));
    service.select_season(Season::Autumn);

    service.set_year(None);

    let state = service.state();
    assert_eq!(state.selected_year, None);
    assert_eq!(state.selected_season, None);
}

#[test]
fn test_setting_year_defaults_season_to_winter() {
    let mut s = SelectionState::default();
    s.set_year(Some(2024));
    assert_eq!(s.selected_season.as_deref(), Some("winter"));
}

#[test]
fn test_setting_year_keeps_chosen_season() {
    let mut s = state(None, None);
    s.set_year(Some(2023));
    s.set_season(Some("summer".to_string()));

    s.set_year(Some(2024));

    assert_eq!(s.selected_year, Some(2024));
    assert_eq!(s.selected_season.as_deref(), Some("summer"));
}

#[test]
fn test_season_before_year_is_kept() {
    let service = service_with(unused_source());
    service.set_season(Some("summer".to_string()));

    let state = service.state();
    assert_eq!(state.selected_year, None);
    assert_eq!(state.selected_season.as_deref(), Some("summer"));
    assert_eq!(service.calendar_season().as_deref(), Some("summer"));
}

#[test]
fn test_calendar_season_derivation() {
    assert_eq!(state(None, None).calendar_season(), None);
    assert_eq!(state(Some(2024), None).calendar_season().as_deref(), Some("2024"));
    assert_eq!(state(None, Some("summer")).calendar_season().as_deref(), Some("summer"));
    assert_eq!(
        state(Some(2024), Some("winter")).calendar_season().as_deref(),
        Some("2024 winter")
    );
}

#[test]
fn test_empty_season_label_counts_as_no_season() {
    let service = service_with(unused_source());
    service.set_year(Some(2024));
    service.set_season(Some(String::new()));

    assert_eq!(service.calendar_season().as_deref(), Some("2024"));
    assert_eq!(state(None, Some("")).calendar_season(), None);
}

// ========================================================================
// BOOTSTRAP
// ========================================================================

#[tokio::test]
async fn test_bootstrap_parses_latest_period() {
    let service = service_with(source_returning(Ok(Some("2025 winter"))));

    service.bootstrap().await;

    let state = service.state();
    assert_eq!(state.selected_year, Some(2025));
    assert_eq!(state.selected_season.as_deref(), Some("winter"));
    assert_eq!(state.available_seasons, vec!["2025 winter".to_string()]);
    assert!(state.initialized);
}

#[tokio::test]
async fn test_bootstrap_keeps_server_season_label() {
    let service = service_with(source_returning(Ok(Some("2024 秋季番组"))));

    service.bootstrap().await;

    assert_eq!(service.calendar_season().as_deref(), Some("2024 秋季番组"));
}

#[tokio::test]
async fn test_bootstrap_with_trailing_space_filters_by_year() {
    let service = service_with(source_returning(Ok(Some("2025 "))));

    service.bootstrap().await;

    let state = service.state();
    assert_eq!(state.selected_year, Some(2025));
    assert_eq!(state.selected_season.as_deref(), Some(""));
    assert_eq!(service.calendar_season().as_deref(), Some("2025"));
}

#[tokio::test]
async fn test_bootstrap_falls_back_on_single_token() {
    let service = service_with(source_returning(Ok(Some("garbage"))));

    service.bootstrap().await;

    let state = service.state();
    assert_eq!(state.selected_year, Some(this_year()));
    assert_eq!(state.selected_season.as_deref(), Some("winter"));
    assert_eq!(state.available_seasons, vec!["garbage".to_string()]);
    assert!(state.initialized);
}

#[tokio::test]
async fn test_bootstrap_falls_back_on_non_numeric_year() {
    let service = service_with(source_returning(Ok(Some("next winter"))));

    service.bootstrap().await;

    assert_eq!(service.state().selected_year, Some(this_year()));
}

#[tokio::test]
async fn test_bootstrap_falls_back_on_empty_answer() {
    for answer in [None, Some("")] {
        let service = service_with(source_returning(Ok(answer)));

        service.bootstrap().await;

        let state = service.state();
        assert_eq!(state.selected_year, Some(this_year()));
        assert_eq!(state.selected_season.as_deref(), Some("winter"));
        assert!(state.available_seasons.is_empty());
        assert!(state.initialized);
    }
}

#[tokio::test]
async fn test_bootstrap_falls_back_on_fetch_failure() {
    let service = service_with(source_returning(Err(ApiError::unknown("offline"))));

    service.bootstrap().await;

    let state = service.state();
    assert_eq!(state.selected_year, Some(this_year()));
    assert_eq!(state.selected_season.as_deref(), Some("winter"));
    assert!(state.initialized);
}

#[tokio::test]
async fn test_bootstrap_fetches_once() {
    let service = service_with(source_returning(Ok(Some("2025 spring"))));

    service.bootstrap().await;
    service.set_year(Some(2020));
    service.bootstrap().await;

    let state = service.state();
    assert_eq!(state.selected_year, Some(2020));
    assert_eq!(state.selected_season.as_deref(), Some("spring"));
    assert!(state.initialized);
}

#[tokio::test]
async fn test_concurrent_bootstraps_fetch_once() {
    let service = service_with(source_returning(Ok(Some("2025 summer"))));

    tokio::join!(service.bootstrap(), service.bootstrap(), service.bootstrap());

    assert_eq!(service.calendar_season().as_deref(), Some("2025 summer"));
}

#[tokio::test]
async fn test_bootstrap_through_api_client_notifies_once() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Err(TransportError::Timeout));

    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(1).return_const(());

    let api = ApiClient::new(
        Arc::new(transport),
        ErrorNormalizer::new(Arc::new(notifier)),
        "http://localhost:8080",
    );
    let service = SelectionService::new(Arc::new(api));

    service.bootstrap().await;

    assert!(service.is_initialized());
    assert_eq!(service.state().selected_year, Some(this_year()));
}

// ========================================================================
// OPTIONS
// ========================================================================

#[test]
fn test_year_options() {
    let options = year_options_until(2025);

    assert_eq!(options[0].title, "All years");
    assert_eq!(options[0].value, None);
    assert_eq!(options[1].value, Some(2025));
    assert_eq!(options.last().map(|o| o.value), Some(Some(EARLIEST_YEAR)));
    assert_eq!(options.len(), 1 + (2025 - EARLIEST_YEAR + 1) as usize);
}

#[test]
fn test_season_options_follow_year() {
    let service = service_with(unused_source());

    let options = service.season_options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, None);

    service.set_year(Some(2024));
    let options = service.season_options();
    let values: Vec<_> = options.iter().map(|o| o.value.clone()).collect();
    assert_eq!(
        values,
        vec![
            Some("winter".to_string()),
            Some("spring".to_string()),
            Some("summer".to_string()),
            Some("autumn".to_string()),
        ]
    );
    assert_eq!(options[0].title, "Winter");
}
