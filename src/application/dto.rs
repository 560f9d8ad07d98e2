// src/application/dto.rs
//
// Data Transfer Objects
//
// - Simple serializable shapes printed by the CLI
// - Built FROM domain and store state, never converted back

use serde::Serialize;

use crate::application::notifier::NotificationColor;
use crate::application::snackbar::SnackbarState;
use crate::integrations::ExternalPlayer;
use crate::services::SelectionState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionDto {
    pub year: Option<i32>,
    pub season: Option<String>,
    /// Value sent as the calendar's `season` filter.
    pub calendar_season: Option<String>,
    pub available_seasons: Vec<String>,
}

impl From<SelectionState> for SelectionDto {
    fn from(state: SelectionState) -> Self {
        Self {
            calendar_season: state.calendar_season(),
            year: state.selected_year,
            season: state.selected_season,
            available_seasons: state.available_seasons,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerLinkDto {
    pub player: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchLinksDto {
    pub stream_url: String,
    pub players: Vec<PlayerLinkDto>,
}

impl WatchLinksDto {
    pub fn new(stream_url: String, players: &[ExternalPlayer]) -> Self {
        let players = players
            .iter()
            .map(|p| PlayerLinkDto {
                player: p.name().to_string(),
                url: p.play_url(&stream_url),
            })
            .collect();
        Self {
            stream_url,
            players,
        }
    }
}

/// Last message shown to the user, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeDto {
    pub text: String,
    pub color: NotificationColor,
}

impl NoticeDto {
    pub fn from_snackbar(state: &SnackbarState) -> Option<Self> {
        if !state.show {
            return None;
        }
        Some(Self {
            text: state.text.clone(),
            color: state.color,
        })
    }
}
