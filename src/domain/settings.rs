// src/domain/settings.rs
//
// Server-side configuration as exposed by `GET /config` and accepted back by
// `POST /config`. The client edits it as a whole document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub log: LogSettings,
    pub server: HttpServerSettings,
    pub mikan: MikanSettings,
    pub bangumi_tv: BangumiTvSettings,
    pub tmdb: TmdbSettings,
    pub parser: ParserSettings,
    pub pan115: Pan115Settings,
    pub notify: NotifySettings,
    pub proxy: ProxySettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerSettings {
    pub assets_path: String,
    pub listen_addr: String,
    pub database_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MikanSettings {
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BangumiTvSettings {
    pub endpoint: String,
    pub image_base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmdbSettings {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
}

/// One LLM-backed title parser. The three providers share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmParserSettings {
    pub enabled: bool,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSettings {
    pub siliconflow: LlmParserSettings,
    pub deepseek: LlmParserSettings,
    pub deepbricks: LlmParserSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pan115Settings {
    pub cookies: String,
    pub download_dir: String,
    pub max_requests_per_second: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramSettings {
    pub enabled: bool,
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifySettings {
    pub telegram: TelegramSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    pub enabled: bool,
    pub http: String,
    pub https: String,
}
