use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot

/// YouTube Data API v3 key
/// Read once at startup from the YTAPI_KEY environment variable
/// Empty when unset; search requests will fail with a clear error
pub static YTAPI_KEY: Lazy<String> = Lazy::new(|| env::var("YTAPI_KEY").unwrap_or_default());

/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Download folder for temporary audio files
/// Read from DOWNLOAD_FOLDER environment variable, defaults to "downloads"
pub static DOWNLOAD_FOLDER: Lazy<String> =
    Lazy::new(|| env::var("DOWNLOAD_FOLDER").unwrap_or_else(|_| "downloads".to_string()));

/// Path to the log file
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "cantora.log".to_string()));

/// Search configuration
pub mod search {
    /// Results requested from the YouTube search endpoint
    pub const MAX_RESULTS: u8 = 11;

    /// Results actually rendered as keyboard buttons
    pub const MAX_BUTTONS: usize = 10;

    /// YouTube category id for Music
    pub const MUSIC_CATEGORY_ID: &str = "10";
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Timeout for outgoing HTTP requests (in seconds)
    pub const TIMEOUT_SECS: u64 = 30;

    /// HTTP request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Download configuration
pub mod download {
    use super::Duration;

    /// Audio container format passed to yt-dlp
    pub const AUDIO_FORMAT: &str = "m4a";

    /// Timeout for yt-dlp commands (in seconds)
    pub const YTDLP_TIMEOUT_SECS: u64 = 300; // 5 minutes

    /// yt-dlp command timeout duration
    pub fn ytdlp_timeout() -> Duration {
        Duration::from_secs(YTDLP_TIMEOUT_SECS)
    }
}

/// Retry configuration
pub mod retry {
    use super::Duration;

    /// Maximum number of retry attempts for sending files
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Delay between retry attempts (in seconds)
    pub const RETRY_DELAY_SECS: u64 = 10;

    /// Retry delay duration
    pub fn delay() -> Duration {
        Duration::from_secs(RETRY_DELAY_SECS)
    }

    /// Maximum number of get_me attempts while the Bot API warms up
    pub const MAX_STARTUP_RETRIES: u32 = 60;

    /// Delay between startup retry attempts (in seconds)
    pub const STARTUP_RETRY_DELAY_SECS: u64 = 5;

    /// Startup retry delay duration
    pub fn startup_delay() -> Duration {
        Duration::from_secs(STARTUP_RETRY_DELAY_SECS)
    }
}
