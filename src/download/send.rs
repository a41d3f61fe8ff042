//! Telegram audio delivery with retry logic
//!
//! Sends a downloaded file as an audio message with title/performer
//! metadata so it renders in Telegram's player. Transient failures (rate
//! limits, network hiccups) are retried a few times before giving up.

use std::path::Path;

use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use teloxide::RequestError;
use tokio::time::sleep;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::youtube::Track;

/// Sends the file at `path` as an audio message.
///
/// When track metadata is available the message carries title, performer
/// and an HTML caption linking to song.link; otherwise a plain fallback
/// caption with the watch URL is used.
///
/// Retries up to `retry::MAX_ATTEMPTS` on rate-limit and network errors,
/// honoring Telegram's `retry_after` hint when given.
pub async fn send_audio_with_retry(
    bot: &Bot,
    chat_id: ChatId,
    path: &Path,
    track: Option<&Track>,
    bot_username: Option<&str>,
) -> AppResult<Message> {
    let mut last_error: Option<RequestError> = None;

    for attempt in 1..=config::retry::MAX_ATTEMPTS {
        let result = build_audio_request(bot, chat_id, path, track, bot_username).await;

        match result {
            Ok(message) => {
                log::info!("Audio sent to chat {} (attempt {})", chat_id.0, attempt);
                return Ok(message);
            }
            Err(e) => {
                let retry_in = match &e {
                    RequestError::RetryAfter(secs) => {
                        let delay = secs.duration();
                        log::warn!("Rate limited sending audio to {}, retry after {}s", chat_id.0, delay.as_secs());
                        Some(delay)
                    }
                    RequestError::Network(_) | RequestError::Io(_) => {
                        log::warn!("Transient error sending audio to {}: {}", chat_id.0, e);
                        Some(config::retry::delay())
                    }
                    _ => None,
                };

                match retry_in {
                    Some(delay) if attempt < config::retry::MAX_ATTEMPTS => {
                        last_error = Some(e);
                        sleep(delay).await;
                    }
                    _ => return Err(AppError::Telegram(e)),
                }
            }
        }
    }

    // Loop only exits early, but keep the compiler honest
    Err(last_error.map(AppError::Telegram).unwrap_or_else(|| {
        AppError::Download("audio send retries exhausted".to_string())
    }))
}

async fn build_audio_request(
    bot: &Bot,
    chat_id: ChatId,
    path: &Path,
    track: Option<&Track>,
    bot_username: Option<&str>,
) -> Result<Message, RequestError> {
    let input = InputFile::file(path.to_path_buf());

    match track {
        Some(track) => {
            bot.send_audio(chat_id, input)
                .title(track.title.clone())
                .performer(track.title.clone())
                .caption(caption_for(track, bot_username))
                .parse_mode(ParseMode::Html)
                .await
        }
        None => {
            // No metadata: file name only, plain caption with the source URL
            let file_stem = path.file_stem().map(|s| s.to_string_lossy().to_string());
            let fallback = file_stem
                .map(|id| format!("🎵 Here is your track: https://youtu.be/{}", id))
                .unwrap_or_else(|| "🎵 Here is your track".to_string());
            bot.send_audio(chat_id, input).caption(fallback).await
        }
    }
}

/// Caption shown under the audio message: bot branding plus a song.link
/// page that aggregates streaming platforms for the video id.
fn caption_for(track: &Track, bot_username: Option<&str>) -> String {
    match bot_username {
        Some(username) => format!(
            "🎵 @{} | <a href=\"https://song.link/y/{}\">Info</a>",
            username, track.video_id
        ),
        None => format!(
            "🎵 <a href=\"https://song.link/y/{}\">Info</a>",
            track.video_id
        ),
    }
}
