//! Typed client over the YouTube Data API v3
//!
//! Two endpoints are involved: `/search` finds candidate videos for a free
//! text query, `/videos` recovers the track durations (the search endpoint
//! does not return them). `YoutubeClient::search_tracks` stitches the two
//! together.

pub mod client;
pub mod models;

pub use self::client::YoutubeClient;
pub use self::models::Track;
