// src/application/commands/bangumi_commands.rs
//
// Bangumi Command Handlers

use crate::application::{dto::WatchLinksDto, state::AppState};
use crate::domain::{Bangumi, Episode, TmdbMetadata, Torrent};
use crate::error::ApiResult;
use crate::integrations::ExternalPlayer;

pub async fn get_bangumi(state: &AppState, id: i32) -> ApiResult<Option<Bangumi>> {
    state.api.get_bangumi_by_id(id).await
}

pub async fn list_episodes(state: &AppState, id: i32) -> ApiResult<Vec<Episode>> {
    state.api.get_bangumi_episodes(id).await
}

pub async fn list_torrents(state: &AppState, id: i32) -> ApiResult<Vec<Torrent>> {
    state.api.get_bangumi_torrents(id).await
}

pub async fn search_tmdb(state: &AppState, name: &str) -> ApiResult<Vec<TmdbMetadata>> {
    state.api.search_bangumi_at_tmdb(name).await
}

/// Stream URL of an episode, plus launch links for `player` (or every
/// known player).
pub fn watch_links(
    state: &AppState,
    bangumi_id: i32,
    episode_number: i32,
    player: Option<ExternalPlayer>,
) -> WatchLinksDto {
    let stream_url = state.api.online_watch_url(bangumi_id, episode_number);
    match player {
        Some(p) => WatchLinksDto::new(stream_url, &[p]),
        None => WatchLinksDto::new(stream_url, &ExternalPlayer::ALL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::http::MockTransport;
    use std::sync::Arc;

    fn offline_state() -> AppState {
        let mut transport = MockTransport::new();
        transport.expect_send().never();
        AppState::from_parts(Arc::new(transport), "http://nas:8080")
    }

    #[test]
    fn test_watch_links_for_one_player() {
        let links = watch_links(&offline_state(), 3, 12, Some(ExternalPlayer::Iina));

        assert_eq!(links.stream_url, "http://nas:8080/api/bangumi/3/12/online_watch");
        assert_eq!(links.players.len(), 1);
        assert_eq!(links.players[0].player, "IINA");
        assert!(links.players[0]
            .url
            .starts_with("iina://weblink?url=http%3A%2F%2Fnas%3A8080"));
    }

    #[test]
    fn test_watch_links_for_all_players() {
        let links = watch_links(&offline_state(), 1, 1, None);
        assert_eq!(links.players.len(), ExternalPlayer::ALL.len());
    }
}
