//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use pup_core::config::DEFAULT_BACKEND_URL;

#[derive(Parser)]
#[command(name = "pup")]
#[command(about = "Pup SDK CLI - Talk to Alberto from your terminal!")]
#[command(
    long_about = r#"Pup SDK CLI - Talk to Alberto from your terminal!

USAGE:
  pup chat -m "hello"            # Send one message
  pup chat -i                    # Interactive chat loop
  pup ls -d src                  # List files on the backend
  pup status                     # Backend status and capabilities
  pup web                        # Launch the web interface

Without API keys configured, the web interface runs in demo mode and
answers with canned puppy replies. For detailed help: pup --help"#
)]
#[command(version)]
pub struct Cli {
    /// Alberto API base URL
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    pub base_url: String,

    /// API key for authentication
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat with Alberto
    Chat {
        /// Message to send to Alberto
        #[arg(short, long)]
        message: Option<String>,

        /// Start interactive chat
        #[arg(short, long)]
        interactive: bool,
    },

    /// List files in a directory
    Ls {
        /// Directory to list
        #[arg(short, long, default_value = ".")]
        directory: String,

        /// List recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// Read file contents
    Cat {
        /// File to read
        file_path: String,

        /// Start line number
        #[arg(short = 's', long)]
        start_line: Option<u32>,

        /// Number of lines to read
        #[arg(short = 'n', long)]
        num_lines: Option<u32>,
    },

    /// Execute a shell command
    Cmd {
        /// Command to run
        command: String,

        /// Working directory
        #[arg(long)]
        cwd: Option<String>,

        /// Seconds before the backend kills the command
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },

    /// Search for text in files
    Grep {
        /// Text to search for
        query: String,

        /// Search directory
        #[arg(short, long, default_value = ".")]
        directory: String,

        /// Maximum results
        #[arg(long, default_value_t = 20)]
        max_results: u32,
    },

    /// Check Alberto's status
    Status,

    /// Launch the web interface
    Web {
        /// Host to bind to
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, env = "PORT", default_value_t = 7860)]
        port: u16,

        /// Answer with keyword-scripted demo replies instead of random ones
        #[arg(long)]
        scripted: bool,
    },
}
