// src/domain/torrent.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::download::DownloadStatus;

/// A torrent collected for a bangumi, with its parse result and the state
/// of any download task created from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Torrent {
    pub info_hash: String,
    pub title: String,
    pub size: i64,
    pub magnet: String,
    pub pub_date: NaiveDateTime,

    // Parsed from the title
    pub release_group: Option<String>,
    pub season_number: Option<i32>,
    pub episode_number: Option<i32>,
    pub language: Option<String>,
    pub video_resolution: Option<String>,
    pub parser_status: Option<ParserStatus>,

    // Download task, if one exists
    pub download_status: Option<DownloadStatus>,
    pub downloader_name: Option<String>,
    pub task_created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParserStatus {
    Pending,
    Completed,
    Failed,
}
