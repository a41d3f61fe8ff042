//! Logging initialization and startup configuration checking

use anyhow::Result;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at application startup
///
/// Validates and logs:
/// - YTAPI_KEY presence (searches fail without it)
/// - YTDL_BIN value
/// - DOWNLOAD_FOLDER path
pub fn log_startup_configuration() {
    if config::YTAPI_KEY.is_empty() {
        log::error!("❌ YTAPI_KEY: not set - YouTube searches will FAIL!");
        log::error!("   Get a key at https://console.cloud.google.com and set YTAPI_KEY");
    } else {
        log::info!("✅ YTAPI_KEY: configured");
    }

    log::info!("YTDL_BIN: {}", *config::YTDL_BIN);

    let folder = std::path::Path::new(config::DOWNLOAD_FOLDER.as_str());
    if folder.exists() {
        log::info!("DOWNLOAD_FOLDER: {} (exists)", folder.display());
    } else {
        log::info!("DOWNLOAD_FOLDER: {} (will be created on first download)", folder.display());
    }
}
