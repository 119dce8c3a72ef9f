//! Command-line interface for holidayd.

mod commands;

use clap::{Parser, Subcommand};

/// holidayd - public holiday countdowns with a search log
#[derive(Parser)]
#[command(name = "holidayd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    Serve,

    /// List public holidays for the configured country and year
    #[command(alias = "ls")]
    Holidays,

    /// Count days until a date and record the search
    #[command(alias = "calc")]
    Countdown {
        /// Holiday name to record
        name: String,
        /// Holiday date, YYYY-MM-DD
        date: String,
    },

    /// Show recent searches
    #[command(alias = "h")]
    History {
        /// Number of entries to show (at most 50)
        #[arg(long, short, default_value = "10")]
        limit: u64,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
