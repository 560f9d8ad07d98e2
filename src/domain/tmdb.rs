// src/domain/tmdb.rs
//
// TMDB search results and manual metadata binding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbMetadata {
    pub id: u64,
    pub name: String,
    pub poster_image_url: Option<String>,
    pub air_date: Option<NaiveDate>,
    #[serde(default)]
    pub seasons: Vec<TmdbSeason>,
    pub description: Option<String>,
    pub kind: BgmKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbSeason {
    pub number: u64,
    pub name: String,
    pub air_date: Option<NaiveDate>,
    pub ep_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BgmKind {
    #[serde(alias = "anime")]
    Anime,
    #[serde(alias = "movie")]
    Movie,
}

/// Body of `POST /bangumi/{bangumi_id}/mdb/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMdbParams {
    pub bangumi_id: i32,
    pub kind: BgmKind,
    pub tmdb_id: Option<u64>,
    pub mikan_id: Option<i32>,
    pub bangumi_tv_id: Option<i32>,
    pub season_number: Option<u64>,
}
