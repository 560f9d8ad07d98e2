// src/domain/bangumi.rs
//
// Bangumi (a tracked show) and the requests that act on it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A show as listed by the calendar and the library views.
///
/// Subscription fields are flattened in by the server; they are all `None`
/// for shows nobody subscribed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bangumi {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,

    /// External ids, filled in by metadata matching
    pub bangumi_tv_id: Option<i32>,
    pub tmdb_id: Option<u64>,
    pub mikan_id: Option<i32>,

    /// Server-relative asset paths (already prefixed with the assets mount)
    pub poster_image_url: Option<String>,
    pub backdrop_image_url: Option<String>,

    pub air_date: Option<NaiveDateTime>,

    /// Day of week the show airs on, 0 = Sunday
    pub air_week: Option<i32>,
    pub rating: Option<f64>,
    pub ep_count: i32,
    pub season_number: Option<u64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,

    pub subscribe_status: Option<SubscribeStatus>,
    pub start_episode_number: Option<i32>,
    pub resolution_filter: Option<String>,
    pub language_filter: Option<String>,
    pub release_group_filter: Option<String>,
    pub enforce_torrent_release_after_broadcast: Option<bool>,
    pub preferred_downloader: Option<String>,
    pub allow_fallback: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscribeStatus {
    #[default]
    None,
    Subscribed,
    Downloaded,
}

/// Body of `POST /bangumi/{id}/subscribe`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscribeParams {
    pub status: SubscribeStatus,
    pub start_episode_number: Option<i32>,
    pub resolution_filter: Option<String>,
    pub language_filter: Option<String>,
    pub release_group_filter: Option<String>,
    pub collector_interval: Option<i32>,
    pub metadata_interval: Option<i32>,
    #[serde(default)]
    pub enforce_torrent_release_after_broadcast: bool,
    pub preferred_downloader: Option<String>,
    #[serde(default)]
    pub allow_fallback: bool,
}

impl SubscribeParams {
    pub fn new(status: SubscribeStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

/// Body of `POST /bangumi/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBangumiParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub offset: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscribeStatus>,

    /// Period filter, as produced by `SelectionService::calendar_season`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_season: Option<String>,
}

/// One page of a listing plus the total row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(alias = "items")]
    pub list: Vec<T>,
    pub total: u64,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": 42,
            "name": "Frieren",
            "description": null,
            "bangumi_tv_id": 400602,
            "tmdb_id": 209867,
            "mikan_id": 3141,
            "poster_image_url": "/api/assets/posters/42.jpg",
            "backdrop_image_url": null,
            "air_date": "2023-09-29T00:00:00",
            "air_week": 5,
            "rating": 8.9,
            "ep_count": 28,
            "season_number": 1,
            "created_at": "2024-01-01T10:00:00",
            "updated_at": "2024-01-02T10:00:00",
            "subscribe_status": "Subscribed",
            "start_episode_number": null,
            "resolution_filter": "1080P",
            "language_filter": null,
            "release_group_filter": null
        })
    }

    #[test]
    fn test_bangumi_decodes_server_shape() {
        let bangumi: Bangumi = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(bangumi.id, 42);
        assert_eq!(bangumi.subscribe_status, Some(SubscribeStatus::Subscribed));
        assert_eq!(bangumi.resolution_filter.as_deref(), Some("1080P"));
        assert!(bangumi.allow_fallback.is_none());
    }

    #[test]
    fn test_unsubscribed_bangumi() {
        let mut value = sample_json();
        value["subscribe_status"] = json!(null);
        let bangumi: Bangumi = serde_json::from_value(value).unwrap();
        assert_eq!(bangumi.subscribe_status, None);
    }

    #[test]
    fn test_query_params_skip_absent_filters() {
        let params = QueryBangumiParams {
            offset: 0,
            limit: 20,
            calendar_season: Some("2024 winter".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({"offset": 0, "limit": 20, "calendar_season": "2024 winter"})
        );
    }

    #[test]
    fn test_paginated_accepts_items_alias() {
        let page: Paginated<i32> =
            serde_json::from_value(json!({"items": [1, 2], "total": 9})).unwrap();
        assert_eq!(page.list, vec![1, 2]);
        assert_eq!(page.total, 9);
    }
}
