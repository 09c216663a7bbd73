//! Command routing logic for the CLI

use crate::args::{Cli, Commands};
use crate::commands::{self, ClientArgs};
use crate::web;

/// Route a parsed command line to its handler.
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let connection = ClientArgs {
        base_url: cli.base_url,
        api_key: cli.api_key,
        timeout: cli.timeout,
    };

    match cli.command {
        Commands::Chat {
            message,
            interactive,
        } => commands::chat::run(&connection, message.as_deref(), interactive).await,
        Commands::Ls {
            directory,
            recursive,
        } => commands::files::ls(&connection, &directory, recursive).await,
        Commands::Cat {
            file_path,
            start_line,
            num_lines,
        } => commands::files::cat(&connection, &file_path, start_line, num_lines).await,
        Commands::Cmd {
            command,
            cwd,
            timeout,
        } => commands::shell::run(&connection, &command, cwd.as_deref(), timeout).await,
        Commands::Grep {
            query,
            directory,
            max_results,
        } => commands::search::run(&connection, &query, &directory, max_results).await,
        Commands::Status => commands::status::run(&connection).await,
        Commands::Web {
            host,
            port,
            scripted,
        } => web::serve(&host, port, scripted).await,
    }
}
