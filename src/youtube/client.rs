//! YouTube Data API v3 client

use std::collections::HashMap;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::youtube::models::{SearchResponse, Track, VideosResponse};

const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Thin client over the search and videos endpoints.
///
/// Holds a single `reqwest::Client` so connections are reused across the
/// two calls that make up one search.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YoutubeClient {
    /// Creates a client against the production API.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Creates a client against a custom base URL (used by tests to point
    /// at a mock server).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder().timeout(config::network::timeout()).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Searches YouTube's Music category for `query` and merges in the
    /// track durations from the videos endpoint.
    ///
    /// Result order follows the search ranking. Videos the details call
    /// did not return keep an empty duration rather than being dropped.
    ///
    /// # Errors
    /// * `AppError::NoResults` - the search returned zero items
    /// * `AppError::HttpStatus` - either endpoint answered non-2xx
    /// * `AppError::Http` - transport failure
    pub async fn search_tracks(&self, query: &str) -> AppResult<Vec<Track>> {
        let url = format!("{}/search", self.base_url);
        let max_results = config::search::MAX_RESULTS.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("videoCategoryId", config::search::MUSIC_CATEGORY_ID),
                ("maxResults", max_results.as_str()),
                ("q", query),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("YouTube search returned status {} for {:?}", response.status(), query);
            return Err(AppError::HttpStatus(response.status()));
        }

        let search: SearchResponse = response.json().await?;
        if search.items.is_empty() {
            return Err(AppError::NoResults(query.to_string()));
        }

        let video_ids: Vec<&str> = search.items.iter().map(|item| item.id.video_id.as_str()).collect();
        let durations = self.fetch_durations(&video_ids).await?;

        let tracks = search
            .items
            .into_iter()
            .map(|item| {
                let duration = durations.get(&item.id.video_id).cloned().unwrap_or_default();
                Track {
                    video_id: item.id.video_id,
                    title: item.snippet.title,
                    duration,
                }
            })
            .collect();

        Ok(tracks)
    }

    /// Looks up a single track by video id, returning title and duration
    /// for the audio metadata. `None` when the id is unknown.
    pub async fn track_by_id(&self, video_id: &str) -> AppResult<Option<Track>> {
        let url = format!("{}/videos", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet,contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("YouTube videos lookup returned status {} for id {}", response.status(), video_id);
            return Err(AppError::HttpStatus(response.status()));
        }

        let videos: VideosResponse = response.json().await?;
        Ok(videos.items.into_iter().next().map(|item| Track {
            title: item
                .snippet
                .map(|snippet| snippet.title)
                .unwrap_or_else(|| item.id.clone()),
            video_id: item.id,
            duration: item.content_details.duration,
        }))
    }

    /// Cross-references video ids against the videos endpoint and returns
    /// a duration per id. Ids missing from the response are simply absent
    /// from the map.
    async fn fetch_durations(&self, video_ids: &[&str]) -> AppResult<HashMap<String, String>> {
        let url = format!("{}/videos", self.base_url);
        let ids = video_ids.join(",");
        let response = self
            .http
            .get(&url)
            .query(&[("part", "contentDetails"), ("id", ids.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("YouTube durations lookup returned status {}", response.status());
            return Err(AppError::HttpStatus(response.status()));
        }

        let videos: VideosResponse = response.json().await?;
        Ok(videos
            .items
            .into_iter()
            .map(|item| (item.id, item.content_details.duration))
            .collect())
    }
}
