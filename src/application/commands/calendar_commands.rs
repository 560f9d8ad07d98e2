// src/application/commands/calendar_commands.rs
//
// Calendar Command Handlers

use crate::application::{dto::SelectionDto, state::AppState};
use crate::domain::Bangumi;
use crate::error::ApiResult;

/// Bootstrap the selection (once) and return it.
pub async fn current_selection(state: &AppState) -> SelectionDto {
    state.selection.bootstrap().await;
    state.selection.state().into()
}

/// Shows airing in `season`, or in the bootstrapped selection when `None`.
pub async fn show_calendar(state: &AppState, season: Option<&str>) -> ApiResult<Vec<Bangumi>> {
    let season = match season {
        Some(s) => Some(s.to_string()),
        None => {
            state.selection.bootstrap().await;
            state.selection.calendar_season()
        }
    };
    state.api.fetch_calendar(season.as_deref()).await
}
