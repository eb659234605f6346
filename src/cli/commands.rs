//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodcal")]
#[command(about = "Mood tracking calendar for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Year to show (default: config year, else the current year)
    #[arg(short, long, global = true)]
    pub year: Option<String>,

    /// Path to a TOML config file (default: $MOODCAL_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the calendar and exit
    Show {
        /// Only show this month (name or 1-12)
        #[arg(short, long)]
        month: Option<String>,

        /// Give every day a random mood
        #[arg(short, long)]
        random: bool,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Mood to paint --paint dates with
        #[arg(long)]
        mood: Option<String>,

        /// Dates to paint (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", num_args = 1..)]
        paint: Vec<String>,

        /// Also print per-mood day counts
        #[arg(long)]
        stats: bool,
    },

    /// List the available moods
    Palette,

    /// Read commands from stdin and redraw after each change
    Interactive,
}
