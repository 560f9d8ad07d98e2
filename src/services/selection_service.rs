// src/services/selection_service.rs
//
// Year / season filter shared by the calendar and library views.
//
// STATE MACHINE:
// - (None, None, initialized = false) at start
// - a season is never kept without a year, except when set_season is
//   called before any set_year
// - bootstrap runs the period lookup at most once per instance
// - initialized never goes back to false

use async_trait::async_trait;
use chrono::Datelike;
use log::{info, warn};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use tokio::sync::Mutex;

use crate::api::ApiClient;
use crate::domain::{Period, Season, SelectOption};
use crate::error::ApiResult;

/// Oldest year offered by the year selector.
pub const EARLIEST_YEAR: i32 = 2015;

/// Where the latest broadcast period comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LatestPeriodSource: Send + Sync {
    /// `"<year> <season>"`, or `None` when the server has nothing yet.
    async fn latest_period(&self) -> ApiResult<Option<String>>;
}

#[async_trait]
impl LatestPeriodSource for ApiClient {
    async fn latest_period(&self) -> ApiResult<Option<String>> {
        self.fetch_calendar_season().await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub selected_year: Option<i32>,
    pub selected_season: Option<String>,
    pub available_seasons: Vec<String>,
    pub initialized: bool,
}

impl SelectionState {
    pub fn set_year(&mut self, year: Option<i32>) {
        self.selected_year = year;
        match year {
            None => self.selected_season = None,
            Some(_) if self.selected_season.is_none() => {
                self.selected_season = Some(Season::default().to_string());
            }
            Some(_) => {}
        }
    }

    pub fn set_season(&mut self, season: Option<String>) {
        self.selected_season = season;
    }

    /// Filter value for the server's calendar queries. An empty season label
    /// counts as no season.
    pub fn calendar_season(&self) -> Option<String> {
        let season = self.selected_season.as_deref().filter(|s| !s.is_empty());
        match (self.selected_year, season) {
            (None, None) => None,
            (Some(year), None) => Some(year.to_string()),
            (None, Some(season)) => Some(season.to_string()),
            (Some(year), Some(season)) => Some(format!("{} {}", year, season)),
        }
    }

    fn apply_period(&mut self, period: Period) {
        self.selected_year = Some(period.year);
        self.selected_season = Some(period.season);
    }

    fn apply_fallback(&mut self, current_year: i32) {
        self.selected_year = Some(current_year);
        self.selected_season = Some(Season::default().to_string());
    }
}

pub struct SelectionService {
    source: Arc<dyn LatestPeriodSource>,
    state: RwLock<SelectionState>,
    bootstrap_lock: Mutex<()>,
}

impl SelectionService {
    pub fn new(source: Arc<dyn LatestPeriodSource>) -> Self {
        Self {
            source,
            state: RwLock::new(SelectionState::default()),
            bootstrap_lock: Mutex::new(()),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .initialized
    }

    pub fn set_year(&self, year: Option<i32>) {
        self.write().set_year(year);
    }

    pub fn set_season(&self, season: Option<String>) {
        self.write().set_season(season);
    }

    pub fn select_season(&self, season: Season) {
        self.set_season(Some(season.to_string()));
    }

    pub fn calendar_season(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .calendar_season()
    }

    /// Pick the initial period from the server.
    ///
    /// Falls back to the current year's winter season when the server has no
    /// period, answers with something unparsable, or fails. Later calls do
    /// nothing; concurrent calls wait for the first one.
    pub async fn bootstrap(&self) {
        let _running = self.bootstrap_lock.lock().await;
        if self.is_initialized() {
            return;
        }

        let fetched = self.source.latest_period().await;

        let mut state = self.write();
        match fetched {
            Ok(Some(latest)) if !latest.is_empty() => {
                state.available_seasons = vec![latest.clone()];
                match Period::parse(&latest) {
                    Some(period) => {
                        info!("Selection initialized to {}", period);
                        state.apply_period(period);
                    }
                    None => {
                        warn!("Unrecognized period {:?}, using current year", latest);
                        state.apply_fallback(current_year());
                    }
                }
            }
            Ok(_) => {
                info!("Server has no current period, using current year");
                state.apply_fallback(current_year());
            }
            Err(err) => {
                warn!("Failed to fetch latest period: {}", err);
                state.apply_fallback(current_year());
            }
        }
        state.initialized = true;
    }

    /// `All years` followed by every year from now back to `EARLIEST_YEAR`.
    pub fn year_options(&self) -> Vec<SelectOption<Option<i32>>> {
        year_options_until(current_year())
    }

    /// Concrete seasons once a year is chosen; only `All seasons` before that.
    pub fn season_options(&self) -> Vec<SelectOption<Option<String>>> {
        if self.state().selected_year.is_none() {
            return vec![SelectOption::new("All seasons", None)];
        }

        Season::ALL
            .iter()
            .map(|s| SelectOption::new(capitalize(s.as_str()), Some(s.to_string())))
            .collect()
    }

    fn write(&self) -> RwLockWriteGuard<'_, SelectionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SelectionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionService")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

pub(crate) fn year_options_until(current: i32) -> Vec<SelectOption<Option<i32>>> {
    let mut options = vec![SelectOption::new("All years", None)];
    options.extend(
        (EARLIEST_YEAR..=current)
            .rev()
            .map(|year| SelectOption::new(year.to_string(), Some(year))),
    );
    options
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
