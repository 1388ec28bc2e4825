//! cornerft - client for the Cornèr Bank data transfer platform.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cornerft::cli::output;
use cornerft::cli::{execute, Cli};
use cornerft::core::constants::ENV_LOG;
use cornerft::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cornerft=debug")
        } else {
            EnvFilter::new("cornerft=warn")
        }
    });

    // Logs go to stderr so listing output stays pipeable.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Auth(_) => Some("check the username and password"),
            Error::Decryption(_) => Some("is gpg installed and the private key imported?"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
