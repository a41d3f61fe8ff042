//! Integration tests for the YouTube client using wiremock
//!
//! These tests point `YoutubeClient` at a local mock server and verify the
//! search → durations merge pipeline plus its failure modes.
//!
//! Run with: cargo test --test youtube_client_test

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cantora::core::AppError;
use cantora::youtube::YoutubeClient;

async fn client(server: &MockServer) -> YoutubeClient {
    YoutubeClient::with_base_url("test-api-key", server.uri()).expect("client should build")
}

fn search_body(items: &[(&str, &str)]) -> serde_json::Value {
    json!({
        "items": items
            .iter()
            .map(|(id, title)| json!({
                "id": { "videoId": id },
                "snippet": { "title": title }
            }))
            .collect::<Vec<_>>()
    })
}

fn videos_body(items: &[(&str, &str)]) -> serde_json::Value {
    json!({
        "items": items
            .iter()
            .map(|(id, duration)| json!({
                "id": id,
                "contentDetails": { "duration": duration }
            }))
            .collect::<Vec<_>>()
    })
}

#[tokio::test]
async fn search_merges_durations_preserving_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "yesterday"))
        .and(query_param("videoCategoryId", "10"))
        .and(query_param("maxResults", "11"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[
            ("vid1", "Yesterday (Remastered)"),
            ("vid2", "Yesterday - Live"),
            ("vid3", "Yesterday Cover"),
        ])))
        .mount(&server)
        .await;

    // Durations come back in a different order, and vid3 is missing
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "contentDetails"))
        .and(query_param("id", "vid1,vid2,vid3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(videos_body(&[("vid2", "PT3M10S"), ("vid1", "PT2M5S")])),
        )
        .mount(&server)
        .await;

    let tracks = client(&server).await.search_tracks("yesterday").await.expect("search should succeed");

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].video_id, "vid1");
    assert_eq!(tracks[0].title, "Yesterday (Remastered)");
    assert_eq!(tracks[0].duration, "PT2M5S");
    assert_eq!(tracks[1].video_id, "vid2");
    assert_eq!(tracks[1].duration, "PT3M10S");
    // Missing duration keeps the row, with an empty duration
    assert_eq!(tracks[2].video_id, "vid3");
    assert_eq!(tracks[2].duration, "");
}

#[tokio::test]
async fn search_with_zero_items_is_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = client(&server).await.search_tracks("zxqj").await.expect_err("should fail");
    assert!(matches!(err, AppError::NoResults(query) if query == "zxqj"));
}

#[tokio::test]
async fn search_propagates_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let err = client(&server).await.search_tracks("anything").await.expect_err("should fail");
    assert!(matches!(err, AppError::HttpStatus(status) if status.as_u16() == 403));
}

#[tokio::test]
async fn details_failure_fails_the_whole_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[("vid1", "Some Song")])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server).await.search_tracks("some song").await.expect_err("should fail");
    assert!(matches!(err, AppError::HttpStatus(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn track_by_id_returns_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "snippet,contentDetails"))
        .and(query_param("id", "dQw4w9WgXcQ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "dQw4w9WgXcQ",
                "snippet": { "title": "Never Gonna Give You Up" },
                "contentDetails": { "duration": "PT3M33S" }
            }]
        })))
        .mount(&server)
        .await;

    let track = client(&server)
        .await
        .track_by_id("dQw4w9WgXcQ")
        .await
        .expect("lookup should succeed")
        .expect("track should exist");

    assert_eq!(track.video_id, "dQw4w9WgXcQ");
    assert_eq!(track.title, "Never Gonna Give You Up");
    assert_eq!(track.duration, "PT3M33S");
    assert_eq!(track.watch_url(), "https://youtu.be/dQw4w9WgXcQ");
}

#[tokio::test]
async fn track_by_id_unknown_id_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let track = client(&server).await.track_by_id("nope").await.expect("lookup should succeed");
    assert!(track.is_none());
}
