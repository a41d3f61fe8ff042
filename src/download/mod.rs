//! Download management: yt-dlp invocation and Telegram audio delivery

pub mod audio;
pub mod send;

pub use self::audio::{cleanup_file, download_track};
pub use self::send::send_audio_with_retry;
