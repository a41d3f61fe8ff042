use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cantora")]
#[command(author, version, about = "Telegram bot that finds music on YouTube and delivers the audio", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Search YouTube from the terminal and print the results
    Search {
        /// Song title to search for
        query: String,
    },

    /// Download one track to disk without Telegram
    Download {
        /// YouTube video id (the 11-character watch id)
        video_id: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
