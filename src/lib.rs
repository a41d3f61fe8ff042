//! Cantora - Telegram bot for finding music on YouTube and delivering the audio
//!
//! The bot takes a song title from the user, searches YouTube, lets the user
//! pick a result from an inline keyboard, then downloads the audio track with
//! yt-dlp and sends it back as a Telegram audio message.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging and small shared helpers
//! - `youtube`: typed client over the YouTube Data API v3
//! - `download`: yt-dlp invocation and audio delivery
//! - `telegram`: bot commands, inline keyboards and the dispatcher schema

pub mod cli;
pub mod core;
pub mod download;
pub mod telegram;
pub mod youtube;

// Re-export commonly used types for convenience
pub use self::core::{config, AppError, AppResult};
pub use self::telegram::{schema, HandlerDeps};
pub use self::youtube::{Track, YoutubeClient};
