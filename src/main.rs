use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use tokio::time::sleep;

use cantora::cli::{Cli, Commands};
use cantora::core::utils::format_iso8601_duration;
use cantora::core::{config, init_logger, log_startup_configuration};
use cantora::download::download_track;
use cantora::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use cantora::youtube::YoutubeClient;

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Search { query }) => run_cli_search(query).await,
        Some(Commands::Download { video_id }) => run_cli_download(video_id).await,
    }
}

/// Run the Telegram bot
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");
    log_startup_configuration();

    let bot = create_bot()?;

    // Get bot information to brand the audio captions.
    // Retry while the Bot API is still warming up.
    let bot_info = {
        let mut startup_retry = 0;
        loop {
            match bot.get_me().await {
                Ok(info) => break info,
                Err(e) => {
                    startup_retry += 1;
                    if startup_retry >= config::retry::MAX_STARTUP_RETRIES {
                        return Err(anyhow::anyhow!(
                            "Failed to connect to Bot API after {} retries: {}",
                            startup_retry,
                            e
                        ));
                    }
                    log::warn!(
                        "Bot API not ready (attempt {}/{}): {}. Retrying in {}s...",
                        startup_retry,
                        config::retry::MAX_STARTUP_RETRIES,
                        e,
                        config::retry::STARTUP_RETRY_DELAY_SECS
                    );
                    sleep(config::retry::startup_delay()).await;
                }
            }
        }
    };
    let bot_username = bot_info.username.clone();
    log::info!("Authorized as @{}", bot_username.as_deref().unwrap_or("<unknown>"));

    setup_bot_commands(&bot).await?;

    let yt = Arc::new(YoutubeClient::new(config::YTAPI_KEY.clone())?);
    let deps = HandlerDeps::new(yt, bot_username);
    let handler = schema(deps);

    log::info!("Starting bot in long polling mode");
    log::info!("📡 Ready to receive updates!");

    // Drop updates that accumulated while the bot was down; stale search
    // queries are not worth answering minutes later
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Run the search subcommand: print results to stdout
async fn run_cli_search(query: String) -> Result<()> {
    let yt = YoutubeClient::new(config::YTAPI_KEY.clone())?;
    let tracks = yt.search_tracks(&query).await?;

    println!("Results for \"{}\":", query);
    for track in &tracks {
        println!(
            "  {:>8}  {}  {}",
            format_iso8601_duration(&track.duration),
            track.video_id,
            track.title
        );
    }
    Ok(())
}

/// Run the download subcommand: fetch one track to disk
async fn run_cli_download(video_id: String) -> Result<()> {
    let path = download_track(&video_id).await?;
    println!("Downloaded to {}", path.display());
    Ok(())
}
