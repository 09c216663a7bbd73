//! Pup CLI application
//!
//! Talk to Alberto the code puppy from your terminal.
//!
//! # Usage
//!
//! ```bash
//! pup chat -m "hello"            # One-shot chat
//! pup chat -i                    # Interactive chat loop
//! pup ls -d src -r               # List backend files
//! pup cat README.md              # Read a backend file
//! pup cmd "cargo --version"      # Run a shell command
//! pup grep "fn main" -d src      # Search backend files
//! pup status                     # Backend status and capabilities
//! pup web --port 7860            # Launch the web interface
//! ```
//!
//! Connection options (`--base-url`, `--api-key`, `--timeout`) come before
//! the subcommand. Set `RUST_LOG=debug` for verbose logging.

mod args;
mod commands;
mod router;
mod web;

#[cfg(test)]
mod test_support;

use clap::Parser;
use console::style;
use pup_core::PupError;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Initialize logging with environment-based filtering
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = router::route(cli).await {
        // PupError displays its own failure class ("Connection error: ...").
        match err.downcast_ref::<PupError>() {
            Some(pup) => eprintln!("{}", style(pup.to_string()).red()),
            None => eprintln!("{}", style(format!("Error: {:#}", err)).red()),
        }
        std::process::exit(1);
    }
}
