// src/domain/download.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadStatus {
    Pending,
    Downloading,
    Completed,
    Failed,
    Retrying,
    Cancelled,
    Paused,
}

/// Row of the downloads view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadTask {
    pub bangumi_id: i32,
    pub name: String,
    pub episode_number: i32,
    pub info_hash: String,
    pub file_name: String,
    pub file_size: i64,
    pub download_status: DownloadStatus,
    pub downloader: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub err_msg: Option<String>,
    pub retry_count: i32,
}

/// Body of `POST /downloads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDownloadTask {
    pub offset: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DownloadStatus>,
}

impl QueryDownloadTask {
    pub fn page(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            status: None,
        }
    }

    pub fn with_status(mut self, status: DownloadStatus) -> Self {
        self.status = Some(status);
        self
    }
}
