// src/application/commands/system_commands.rs
//
// Downloads and server status

use crate::application::state::AppState;
use crate::domain::{DownloadTask, Metrics, QueryDownloadTask};
use crate::error::ApiResult;

pub async fn list_downloads(
    state: &AppState,
    offset: u64,
    limit: u64,
) -> ApiResult<Vec<DownloadTask>> {
    state
        .api
        .fetch_download_tasks(&QueryDownloadTask::page(offset, limit))
        .await
}

pub async fn get_metrics(state: &AppState) -> ApiResult<Metrics> {
    state.api.fetch_metrics().await
}
