//! Dispatcher schema and update handlers
//!
//! The bot is a linear pipeline with three entry points: commands,
//! free-text search queries, and track-selection callbacks. The same
//! schema is used in production and in integration tests.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Message, ReplyParameters};

use crate::core::error::AppError;
use crate::download::{cleanup_file, download_track, send_audio_with_retry};
use crate::telegram::bot::{help_text, start_text, Command};
use crate::telegram::keyboard::{parse_track_callback, search_results_keyboard};
use crate::youtube::YoutubeClient;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub yt: Arc<YoutubeClient>,
    pub bot_username: Option<String>,
}

impl HandlerDeps {
    pub fn new(yt: Arc<YoutubeClient>, bot_username: Option<String>) -> Self {
        Self { yt, bot_username }
    }
}

/// Creates the main dispatcher schema for the Telegram bot.
///
/// # Arguments
/// * `deps` - Handler dependencies (YouTube client, bot identity)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_messages = deps.clone();
    let deps_callback = deps.clone();

    dptree::entry()
        // Commands first so "/start" is not treated as a search query
        .branch(command_handler())
        // Commands we don't know get the help text, not a silent drop
        .branch(unknown_command_handler())
        // Any other text message is a search query
        .branch(message_handler(deps_messages))
        // Track selection from the results keyboard
        .branch(callback_handler(deps_callback))
}

/// Handler for /start and /help
fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        |bot: Bot, msg: Message, cmd: Command| async move {
            let text = match cmd {
                Command::Start => start_text(),
                Command::Help => help_text(),
            };
            bot.send_message(msg.chat.id, text).await?;
            Ok(())
        },
    ))
}

/// Handler for commands not in the `Command` enum: reply with the help
/// text instead of dropping the message
fn unknown_command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text.starts_with('/')).unwrap_or(false))
        .endpoint(|bot: Bot, msg: Message| async move {
            log::debug!("Unknown command in chat {}: {:?}", msg.chat.id.0, msg.text());
            bot.send_message(msg.chat.id, help_text()).await?;
            Ok(())
        })
}

/// True when a message text should be treated as a search query:
/// non-empty and not a command.
fn is_search_query(text: &str) -> bool {
    !text.trim().is_empty() && !text.starts_with('/')
}

/// Handler for free-text search queries
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(is_search_query).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                handle_search_message(&bot, &msg, &deps).await;
                Ok(())
            }
        })
}

/// Handler for callback queries from the results keyboard
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            handle_track_callback(&bot, q, &deps).await;
            Ok(())
        }
    })
}

/// Searches YouTube for the message text and replies with the results
/// keyboard. Every failure path answers the user.
async fn handle_search_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) {
    let Some(query) = msg.text() else { return };
    let username = msg
        .from
        .as_ref()
        .and_then(|user| user.username.as_deref())
        .unwrap_or("<unknown>");
    log::info!("[{}] search: {}", username, query);

    match deps.yt.search_tracks(query).await {
        Ok(tracks) => {
            let keyboard = search_results_keyboard(&tracks);
            let send = bot
                .send_message(msg.chat.id, format!("🎶 Results for \"{}\" — pick a track:", query.trim()))
                .reply_markup(keyboard)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await;
            if let Err(e) = send {
                log::error!("Failed to send results keyboard to chat {}: {}", msg.chat.id.0, e);
            }
        }
        Err(AppError::NoResults(_)) => {
            reply_text(bot, msg, "😕 No tracks found for that title. Try another search.").await;
        }
        Err(e) => {
            log::error!("Search failed for {:?}: {}", query, e);
            reply_text(bot, msg, "❌ Could not fetch search results. Try again later.").await;
        }
    }
}

/// Downloads the selected track and sends the audio back.
///
/// The callback query is answered immediately so the button stops showing
/// the loading spinner while yt-dlp runs. A metadata lookup failure is
/// non-fatal: the audio is sent with a fallback caption.
async fn handle_track_callback(bot: &Bot, q: CallbackQuery, deps: &HandlerDeps) {
    let Some(video_id) = q.data.as_deref().and_then(parse_track_callback).map(str::to_string) else {
        log::debug!("Ignoring unrecognized callback data: {:?}", q.data);
        let _ = bot.answer_callback_query(q.id).await;
        return;
    };

    let Some(chat_id) = q.message.as_ref().map(|m| m.chat().id) else {
        log::warn!("Callback for track {} has no originating message, cannot deliver", video_id);
        let _ = bot.answer_callback_query(q.id).await;
        return;
    };

    if let Err(e) = bot.answer_callback_query(q.id).text("⏳ Downloading the audio…").await {
        log::warn!("Failed to answer callback query: {}", e);
    }

    // Metadata lookup is best-effort; the download proceeds without it
    let track = match deps.yt.track_by_id(&video_id).await {
        Ok(track) => track,
        Err(e) => {
            log::warn!("Metadata lookup failed for {}: {}", video_id, e);
            None
        }
    };

    let path = match download_track(&video_id).await {
        Ok(path) => path,
        Err(e) => {
            log::error!("Download failed for {}: {}", video_id, e);
            let _ = bot.send_message(chat_id, "❌ Failed to download the audio.").await;
            return;
        }
    };

    let sent = send_audio_with_retry(bot, chat_id, &path, track.as_ref(), deps.bot_username.as_deref()).await;
    cleanup_file(&path).await;

    if let Err(e) = sent {
        log::error!("Failed to send audio for {} to chat {}: {}", video_id, chat_id.0, e);
        let _ = bot.send_message(chat_id, "❌ Failed to send the audio.").await;
    }
}

async fn reply_text(bot: &Bot, msg: &Message, text: &str) {
    if let Err(e) = bot
        .send_message(msg.chat.id, text)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await
    {
        log::error!("Failed to reply to chat {}: {}", msg.chat.id.0, e);
    }
}
