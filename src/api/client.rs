// src/api/client.rs
//
// Typed client for the bangumi server's REST API.
//
// Every operation has the same shape:
//   1. build the request
//   2. send it through the Transport
//   3. decode the envelope with the operation's default message
//   4. on any failure, hand it to the ErrorNormalizer with that same message
//
// No validation happens here; the server owns that. Nothing is retried.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::sync::Arc;

use super::envelope::Envelope;
use crate::application::error_handling::{ErrorNormalizer, Failure};
use crate::domain::{
    Bangumi, DownloadTask, Episode, Metrics, Paginated, QueryBangumiParams, QueryDownloadTask,
    ServerSettings, SubscribeParams, TmdbMetadata, Torrent, UpdateMdbParams,
};
use crate::error::ApiResult;
use crate::integrations::http::{ApiRequest, Transport};

pub mod messages {
    pub const FETCH_CALENDAR: &str = "Failed to load calendar";
    pub const FETCH_CALENDAR_SEASON: &str = "Failed to load calendar season";
    pub const REFRESH_CALENDAR: &str = "Failed to refresh calendar";
    pub const GET_BANGUMI: &str = "Failed to load bangumi details";
    pub const LIST_BANGUMI: &str = "Failed to load bangumi list";
    pub const SUBSCRIBE: &str = "Subscription update failed";
    pub const GET_EPISODES: &str = "Failed to load episodes";
    pub const GET_TORRENTS: &str = "Failed to load torrents";
    pub const REFRESH_BANGUMI: &str = "Failed to refresh metadata";
    pub const DELETE_DOWNLOAD_TASKS: &str = "Failed to delete download tasks";
    pub const MANUAL_SELECT_TORRENT: &str = "Failed to download selected torrent";
    pub const FETCH_DOWNLOADS: &str = "Failed to load download tasks";
    pub const SEARCH_TMDB: &str = "TMDB search failed";
    pub const UPDATE_MDB: &str = "Failed to update bangumi metadata";
    pub const FETCH_METRICS: &str = "Failed to load system metrics";
    pub const GET_SETTINGS: &str = "Failed to load config";
    pub const UPDATE_SETTINGS: &str = "Failed to update config";
}

pub struct ApiClient {
    transport: Arc<dyn Transport>,
    normalizer: ErrorNormalizer,
    origin: String,
}

impl ApiClient {
    /// `origin` is the server root as seen by external players
    /// (e.g. `http://nas:8080`); it is only used to build stream URLs.
    pub fn new(
        transport: Arc<dyn Transport>,
        normalizer: ErrorNormalizer,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            normalizer,
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    // ========================================================================
    // CALENDAR
    // ========================================================================

    /// Shows airing in `season` (a period such as `"2025 winter"`, a bare
    /// year or a bare season label). `None` asks for the server's current
    /// season.
    pub async fn fetch_calendar(&self, season: Option<&str>) -> ApiResult<Vec<Bangumi>> {
        let request = ApiRequest::get("/calendar").query("season", season);
        self.list(request, messages::FETCH_CALENDAR).await
    }

    /// Latest period the server has a schedule for, e.g. `"2025 winter"`.
    pub async fn fetch_calendar_season(&self) -> ApiResult<Option<String>> {
        self.optional(
            ApiRequest::get("/calendar/season"),
            messages::FETCH_CALENDAR_SEASON,
        )
        .await
    }

    pub async fn refresh_calendar(&self, season: Option<&str>, force: bool) -> ApiResult<()> {
        let request =
            ApiRequest::get(format!("/calendar/refresh/{}", force)).query("season", season);
        self.unit(request, messages::REFRESH_CALENDAR).await
    }

    // ========================================================================
    // BANGUMI
    // ========================================================================

    pub async fn get_bangumi_by_id(&self, id: i32) -> ApiResult<Option<Bangumi>> {
        self.optional(
            ApiRequest::get(format!("/bangumi/{}", id)),
            messages::GET_BANGUMI,
        )
        .await
    }

    pub async fn fetch_bangumi_list(
        &self,
        params: &QueryBangumiParams,
    ) -> ApiResult<Paginated<Bangumi>> {
        let request = self.post("/bangumi/list", params, messages::LIST_BANGUMI)?;
        self.required(request, messages::LIST_BANGUMI).await
    }

    pub async fn subscribe_bangumi(&self, id: i32, params: &SubscribeParams) -> ApiResult<()> {
        let request = self.post(
            format!("/bangumi/{}/subscribe", id),
            params,
            messages::SUBSCRIBE,
        )?;
        self.unit(request, messages::SUBSCRIBE).await
    }

    pub async fn get_bangumi_episodes(&self, id: i32) -> ApiResult<Vec<Episode>> {
        self.list(
            ApiRequest::get(format!("/bangumi/{}/episodes", id)),
            messages::GET_EPISODES,
        )
        .await
    }

    pub async fn get_bangumi_torrents(&self, id: i32) -> ApiResult<Vec<Torrent>> {
        self.list(
            ApiRequest::get(format!("/bangumi/{}/torrents", id)),
            messages::GET_TORRENTS,
        )
        .await
    }

    /// Re-run metadata collection for one show.
    pub async fn refresh_bangumi(&self, id: i32, force: bool) -> ApiResult<()> {
        self.unit(
            ApiRequest::get(format!("/bangumi/{}/refresh/{}", id, force)),
            messages::REFRESH_BANGUMI,
        )
        .await
    }

    pub async fn delete_bangumi_download_tasks(&self, id: i32) -> ApiResult<()> {
        self.unit(
            ApiRequest::get(format!("/bangumi/{}/delete_download_tasks", id)),
            messages::DELETE_DOWNLOAD_TASKS,
        )
        .await
    }

    /// Force a specific torrent for one episode.
    pub async fn manual_select_torrent(
        &self,
        bangumi_id: i32,
        episode_number: i32,
        info_hash: &str,
    ) -> ApiResult<()> {
        let path = format!(
            "/bangumi/{}/{}/manual_select_torrent/{}",
            bangumi_id,
            episode_number,
            urlencoding::encode(info_hash)
        );
        self.unit(ApiRequest::get(path), messages::MANUAL_SELECT_TORRENT)
            .await
    }

    /// Stream URL of a downloaded episode. No request is made.
    pub fn online_watch_url(&self, bangumi_id: i32, episode_number: i32) -> String {
        format!(
            "{}/api/bangumi/{}/{}/online_watch",
            self.origin, bangumi_id, episode_number
        )
    }

    // ========================================================================
    // DOWNLOADS
    // ========================================================================

    pub async fn fetch_download_tasks(
        &self,
        query: &QueryDownloadTask,
    ) -> ApiResult<Vec<DownloadTask>> {
        let request = self.post("/downloads", query, messages::FETCH_DOWNLOADS)?;
        self.list(request, messages::FETCH_DOWNLOADS).await
    }

    // ========================================================================
    // METADATA
    // ========================================================================

    pub async fn search_bangumi_at_tmdb(&self, name: &str) -> ApiResult<Vec<TmdbMetadata>> {
        let path = format!("/tmdb/search/{}", urlencoding::encode(name));
        self.list(ApiRequest::get(path), messages::SEARCH_TMDB).await
    }

    pub async fn update_bangumi_mdb(&self, params: &UpdateMdbParams) -> ApiResult<()> {
        let request = self.post(
            format!("/bangumi/{}/mdb/update", params.bangumi_id),
            params,
            messages::UPDATE_MDB,
        )?;
        self.unit(request, messages::UPDATE_MDB).await
    }

    // ========================================================================
    // SYSTEM
    // ========================================================================

    pub async fn fetch_metrics(&self) -> ApiResult<Metrics> {
        self.required(ApiRequest::get("/metrics"), messages::FETCH_METRICS)
            .await
    }

    pub async fn get_settings(&self) -> ApiResult<ServerSettings> {
        self.required(ApiRequest::get("/config"), messages::GET_SETTINGS)
            .await
    }

    pub async fn update_settings(&self, settings: &ServerSettings) -> ApiResult<()> {
        let request = self.post("/config", settings, messages::UPDATE_SETTINGS)?;
        self.unit(request, messages::UPDATE_SETTINGS).await
    }

    // ========================================================================
    // INTERNAL: request pipeline
    // ========================================================================

    fn post<B: Serialize + ?Sized>(
        &self,
        path: impl Into<String>,
        body: &B,
        default_message: &str,
    ) -> ApiResult<ApiRequest> {
        ApiRequest::post(path, body).or_else(|e| self.normalizer.fail(e, default_message))
    }

    /// Send and decode, without normalizing failures.
    async fn exchange<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        default_message: &str,
    ) -> Result<Option<T>, Failure> {
        let response = self.transport.send(request).await?;
        let envelope: Envelope<T> = response.json()?;
        Ok(envelope.into_result(default_message)?)
    }

    async fn optional<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        default_message: &str,
    ) -> ApiResult<Option<T>> {
        match self.exchange(request, default_message).await {
            Ok(data) => Ok(data),
            Err(failure) => self.normalizer.fail(failure, default_message),
        }
    }

    /// A null payload is an empty list.
    async fn list<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        default_message: &str,
    ) -> ApiResult<Vec<T>> {
        self.optional::<Vec<T>>(request, default_message)
            .await
            .map(Option::unwrap_or_default)
    }

    /// A null payload is a failure.
    async fn required<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        default_message: &str,
    ) -> ApiResult<T> {
        match self.exchange(request, default_message).await {
            Ok(Some(data)) => Ok(data),
            Ok(None) => self
                .normalizer
                .fail(Failure::Message(default_message.to_string()), default_message),
            Err(failure) => self.normalizer.fail(failure, default_message),
        }
    }

    /// Mutations: whatever the payload is, it is ignored.
    async fn unit(&self, request: ApiRequest, default_message: &str) -> ApiResult<()> {
        self.optional::<IgnoredAny>(request, default_message)
            .await
            .map(|_| ())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
