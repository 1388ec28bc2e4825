//! Command-line interface.

pub mod download;
pub mod latest;
pub mod list;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::client::{Credentials, Transfer};
use crate::core::constants::DEFAULT_URL;
use crate::error::Result;

/// cornerft - client for the Cornèr Bank data transfer platform.
#[derive(Parser)]
#[command(
    name = "cornerft",
    about = "Client for the Cornèr Bank data transfer platform",
    version
)]
pub struct Cli {
    /// Platform username
    #[arg(short = 'u', long, env = "CORNERFT_USERNAME")]
    pub username: String,

    /// Platform password
    #[arg(short = 'p', long, env = "CORNERFT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Base URL of the platform
    #[arg(long, env = "CORNERFT_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Enable debug output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the most recently delivered file
    Latest,

    /// List all files
    List,

    /// List files not yet read through the platform
    ListUnread,

    /// Download (and decrypt) a file
    Download {
        /// Skip the decryption step
        #[arg(short = 'n', long = "no-decrypt")]
        no_decrypt: bool,
        /// Remote filename
        filename: String,
        /// Destination path
        destination: PathBuf,
    },
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let credentials = Credentials::new(cli.username, cli.password);
    let transfer = Transfer::new(credentials, &cli.url)?;
    transfer.login()?;

    match cli.command {
        Command::Latest => latest::execute(&transfer),
        Command::List => list::all(&transfer),
        Command::ListUnread => list::unread(&transfer),
        Command::Download {
            no_decrypt,
            filename,
            destination,
        } => download::execute(&transfer, &filename, &destination, !no_decrypt),
    }
}
