// src/domain/episode.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An episode of a bangumi, joined with the state of its download task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: i32,
    pub bangumi_id: i32,
    pub number: i32,
    pub sort_number: Option<i32>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub air_date: Option<NaiveDate>,
    pub duration_seconds: Option<u64>,
    pub kind: EpisodeKind,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub download_state: Option<DownloadState>,
    pub ref_torrent_info_hash: Option<String>,
    pub task_created_at: Option<NaiveDateTime>,
    pub task_updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeKind {
    Ep,
    Sp,
    Op,
    Ed,
    Mad,
    Other,
}

/// Download progress of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadState {
    Missing,
    Ready,
    Downloading,
    Downloaded,
    Failed,
    Retrying,
}
