use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "rivals-ranking: tournament standings")]
pub struct Cli {
    /// Path to a JSON configuration file (scoring season, overrides, tournaments)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding one <tournament>.json file per tournament
    #[arg(short, long, global = true, env = "RIVALS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the player ranking
    Rank {
        /// Show only the first N players
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print each tournament's placements and points
    Tournaments {
        #[arg(long)]
        json: bool,
    },
    /// Print points and participation statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Serve the standings as JSON over HTTP
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
