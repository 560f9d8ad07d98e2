// src/domain/metrics.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Snapshot returned by `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub downloader: DownloaderMetrics,
    pub scheduler: SchedulerMetrics,
    pub process: ProcessMetrics,

    /// Metadata worker section; its shape is owned by the server
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloaderMetrics {
    pub num_of_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerMetrics {
    pub workers: Vec<WorkerMetrics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerMetrics {
    pub name: String,
    pub state: WorkerState,
    pub last_collection_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerState {
    Collecting,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Resident memory in bytes
    pub used: u64,
    pub run_time_sec: u64,
}
