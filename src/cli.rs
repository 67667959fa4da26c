use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recodarr")]
#[command(author, version, about = "Queue Radarr movies for HEVC transcoding")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the largest non-HEVC movies and add them to the transcoder queue
    Run {
        /// Radarr API key
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Radarr server URL
        #[arg(short = 'u', long)]
        url: Option<String>,

        /// Number of movies to process
        #[arg(long)]
        movies: Option<usize>,

        /// Transcoder server URL
        #[arg(long)]
        transcoder_url: Option<String>,

        /// Transcoder web server token
        #[arg(long)]
        transcoder_token: Option<String>,

        /// Show which movies would be queued without submitting them
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default locations if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },
}
