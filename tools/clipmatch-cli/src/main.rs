//! clipmatch CLI: link diarized utterances to extracted audio clips.
//!
//! Usage:
//!   clipmatch align -d <DIAR.json> -c <CLIPS.txt>   Align local files
//!   clipmatch process <URL>                         Run a remote job and align its output
//!   clipmatch normalize <TEXT> [--file]             Show how text or a filename tokenizes
//!   clipmatch config [--init]                       Show or write the effective config

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clipmatch_common::config::AppConfig;

mod commands;
mod render;

use render::OutputFormat;

#[derive(Parser)]
#[command(
    name = "clipmatch",
    about = "Match diarized utterances with extracted audio clips",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/clipmatch/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align a local diarization file with a list of clip paths
    Align {
        /// Diarization JSON (array of utterances)
        #[arg(short, long)]
        diarization: PathBuf,

        /// Clip list, one path per line
        #[arg(short, long)]
        clips: PathBuf,

        /// Maximum normalized score to accept a match [0.0, 1.0]
        #[arg(long)]
        threshold: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Public host for playback URLs
        #[arg(long)]
        public_host: Option<String>,

        /// Internal path prefix replaced by the public host
        #[arg(long)]
        internal_prefix: Option<String>,
    },

    /// Submit a video URL to the processing service and align the result
    Process {
        /// Video URL to process
        url: String,

        /// Maximum normalized score to accept a match [0.0, 1.0]
        #[arg(long)]
        threshold: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Processing service endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Print the slug and tokens derived from text or a clip filename
    Normalize {
        /// Utterance text, or a clip path with --file
        text: String,

        /// Treat the input as a clip filename
        #[arg(long)]
        file: bool,
    },

    /// Print the effective configuration as JSON
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    clipmatch_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Align {
            diarization,
            clips,
            threshold,
            format,
            public_host,
            internal_prefix,
        } => {
            if let Some(host) = public_host {
                config.service.public_host = host;
            }
            if let Some(prefix) = internal_prefix {
                config.service.internal_prefix = prefix;
            }
            commands::align::run(&config, diarization, clips, threshold, format).await
        }
        Commands::Process {
            url,
            threshold,
            format,
            endpoint,
        } => {
            if let Some(endpoint) = endpoint {
                config.service.endpoint = endpoint;
            }
            commands::process::run(&config, url, threshold, format).await
        }
        Commands::Normalize { text, file } => commands::normalize::run(&text, file),
        Commands::Config { init } => commands::config::run(&config, cli.config.as_deref(), init),
    }
}
