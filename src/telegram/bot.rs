//! Bot instance creation and command definitions

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "I can:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "explain how to search for music")]
    Help,
}

/// Creates a Bot instance reading the token from BOT_TOKEN
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to build the HTTP client
pub fn create_bot() -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    Ok(Bot::from_env_with_client(client))
}

/// Sets up bot commands in Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Welcome text for /start
pub fn start_text() -> &'static str {
    "🎶 Hi! Send me a song title and I'll find it on YouTube.\n\
     Pick a result from the list and I'll send you the audio."
}

/// Usage text for /help
pub fn help_text() -> &'static str {
    "Send any text to search YouTube's music category.\n\
     I reply with up to 10 matches; tap one and I download the track \
     and send it back as an audio message."
}
