//! CLI subcommand implementations
//!
//! Every subcommand opens its own client session against the backend,
//! runs one operation, and closes the session before reporting.

pub mod chat;
pub mod files;
pub mod search;
pub mod shell;
pub mod status;

use std::time::Duration;

use pup_core::{PupClient, PupResult};

/// Connection options shared by every subcommand.
pub struct ClientArgs {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: u64,
}

impl ClientArgs {
    /// Build and open a client for one command invocation.
    pub async fn connect(&self) -> PupResult<PupClient> {
        let mut builder = PupClient::builder()
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout));
        if let Some(api_key) = &self.api_key {
            builder = builder.with_api_key(api_key);
        }

        let mut client = builder.build();
        client.connect().await?;
        Ok(client)
    }
}
