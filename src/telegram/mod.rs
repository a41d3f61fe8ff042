//! Telegram bot integration: commands, keyboards and the dispatcher schema

pub mod bot;
pub mod handlers;
pub mod keyboard;

pub use self::bot::{create_bot, setup_bot_commands, Command};
pub use self::handlers::{schema, HandlerDeps, HandlerError};
pub use self::keyboard::{parse_track_callback, search_results_keyboard};
