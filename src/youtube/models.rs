//! Wire types for the YouTube Data API v3 responses

use serde::Deserialize;

/// Response of the `/search` endpoint (only the fields we use).
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    pub title: String,
}

/// Response of the `/videos` endpoint (only the fields we use).
#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<Snippet>,
    #[serde(rename = "contentDetails")]
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    /// ISO-8601 duration, e.g. `PT3M45S`
    pub duration: String,
}

/// A search result with its duration merged in: what the inline keyboard
/// and the audio metadata are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub video_id: String,
    pub title: String,
    /// Raw ISO-8601 duration; empty when the details lookup did not
    /// return this video id.
    pub duration: String,
}

impl Track {
    /// Canonical short watch URL for this track.
    pub fn watch_url(&self) -> String {
        format!("https://youtu.be/{}", self.video_id)
    }
}
