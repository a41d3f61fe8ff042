//! Inline keyboard for search results and callback data parsing
//!
//! Each search hit becomes one full-width button labelled
//! `• {duration} • {title}`. The callback data carries the video id in the
//! form `track_id:{id}:yt`; the `yt` suffix leaves room for other sources
//! without changing the parser.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::core::config;
use crate::core::utils::format_iso8601_duration;
use crate::youtube::Track;

/// Telegram renders roughly this many characters of a button label before
/// ellipsizing; longer titles are truncated on our side so the duration
/// prefix always stays visible.
const MAX_LABEL_CHARS: usize = 64;

const CALLBACK_PREFIX: &str = "track_id";
const CALLBACK_SOURCE: &str = "yt";

/// Builds the results keyboard: one button per row, at most
/// `search::MAX_BUTTONS` rows.
pub fn search_results_keyboard(tracks: &[Track]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = tracks
        .iter()
        .take(config::search::MAX_BUTTONS)
        .map(|track| {
            let label = button_label(track);
            vec![InlineKeyboardButton::callback(label, encode_track_callback(&track.video_id))]
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}

/// Encodes a video id as callback data.
pub fn encode_track_callback(video_id: &str) -> String {
    format!("{}:{}:{}", CALLBACK_PREFIX, video_id, CALLBACK_SOURCE)
}

/// Extracts the video id from callback data, or `None` when the data is
/// not a track selection (wrong shape, wrong prefix/suffix, empty id).
pub fn parse_track_callback(data: &str) -> Option<&str> {
    let mut parts = data.split(':');
    let prefix = parts.next()?;
    let video_id = parts.next()?;
    let source = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if prefix != CALLBACK_PREFIX || source != CALLBACK_SOURCE || video_id.is_empty() {
        return None;
    }
    Some(video_id)
}

fn button_label(track: &Track) -> String {
    let duration = format_iso8601_duration(&track.duration);
    truncate_chars(&format!("• {} • {}", duration, track.title), MAX_LABEL_CHARS)
}

/// Char-boundary-safe truncation with an ellipsis.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn track(id: &str, title: &str, duration: &str) -> Track {
        Track {
            video_id: id.to_string(),
            title: title.to_string(),
            duration: duration.to_string(),
        }
    }

    #[test]
    fn keyboard_has_one_button_per_row() {
        let tracks = vec![
            track("aaa", "First", "PT3M10S"),
            track("bbb", "Second", "PT1H2M3S"),
        ];
        let keyboard = search_results_keyboard(&tracks);
        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert!(keyboard.inline_keyboard.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn keyboard_caps_rows_at_ten() {
        let tracks: Vec<Track> = (0..11)
            .map(|i| track(&format!("id{}", i), &format!("Track {}", i), "PT2M"))
            .collect();
        let keyboard = search_results_keyboard(&tracks);
        assert_eq!(keyboard.inline_keyboard.len(), 10);
    }

    #[test]
    fn labels_contain_formatted_duration() {
        let keyboard = search_results_keyboard(&[track("aaa", "Song", "PT3M45S")]);
        let button = &keyboard.inline_keyboard[0][0];
        assert_eq!(button.text, "• 3:45 • Song");
    }

    #[test]
    fn long_titles_are_truncated() {
        let long_title = "x".repeat(200);
        let keyboard = search_results_keyboard(&[track("aaa", &long_title, "PT1M")]);
        let button = &keyboard.inline_keyboard[0][0];
        assert!(button.text.chars().count() <= 64);
        assert!(button.text.ends_with('…'));
    }

    #[test]
    fn callback_round_trip() {
        let encoded = encode_track_callback("dQw4w9WgXcQ");
        assert_eq!(encoded, "track_id:dQw4w9WgXcQ:yt");
        assert_eq!(parse_track_callback(&encoded), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn parse_rejects_malformed_data() {
        assert_eq!(parse_track_callback(""), None);
        assert_eq!(parse_track_callback("track_id:abc"), None);
        assert_eq!(parse_track_callback("track_id::yt"), None);
        assert_eq!(parse_track_callback("other:abc:yt"), None);
        assert_eq!(parse_track_callback("track_id:abc:spotify"), None);
        assert_eq!(parse_track_callback("track_id:abc:yt:extra"), None);
    }
}
