// src/domain/mod.rs
//
// Domain Root - records exchanged with the server
//
// Every type here mirrors the server's JSON exactly. Field names are the
// wire names; nothing is renamed on the way in.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod bangumi;
pub mod download;
pub mod episode;
pub mod metrics;
pub mod season;
pub mod settings;
pub mod tmdb;
pub mod torrent;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use bangumi::{Bangumi, Paginated, QueryBangumiParams, SubscribeParams, SubscribeStatus};
pub use download::{DownloadStatus, DownloadTask, QueryDownloadTask};
pub use episode::{DownloadState, Episode, EpisodeKind};
pub use metrics::{
    DownloaderMetrics, Metrics, ProcessMetrics, SchedulerMetrics, WorkerMetrics, WorkerState,
};
pub use season::{Period, Season, SelectOption};
pub use settings::{
    BangumiTvSettings, HttpServerSettings, LlmParserSettings, LogLevel, LogSettings,
    MikanSettings, NotifySettings, Pan115Settings, ParserSettings, ProxySettings, ServerSettings,
    TelegramSettings, TmdbSettings,
};
pub use tmdb::{BgmKind, TmdbMetadata, TmdbSeason, UpdateMdbParams};
pub use torrent::{ParserStatus, Torrent};
