//! Environment-driven constructors

use std::time::Duration;

use tracing::info;

use super::builder::PupClientBuilder;
use super::types::PupClient;
use crate::config::{self, OperatingMode};
use crate::error::{PupError, PupResult};

impl PupClient {
    /// Start configuring a client by hand.
    pub fn builder() -> PupClientBuilder {
        PupClientBuilder::new()
    }

    /// Build a client from the environment without ever failing.
    ///
    /// Runs the configuration resolver with `base_url` as the explicit
    /// fallback and mirrors its outcome: a keyed client when a model
    /// credential is usable, a keyless client against a remote backend,
    /// or a demo-mode client when nothing is configured. Key material is
    /// never logged.
    pub fn from_env(base_url: Option<&str>) -> Self {
        Self::from_resolved(&config::resolve(base_url))
    }

    /// Build a client matching an already resolved configuration.
    pub fn from_resolved(resolved: &config::ResolvedConfig) -> Self {
        let mut builder = Self::builder()
            .with_base_url(&resolved.backend_url)
            .with_demo_mode(matches!(resolved.mode, OperatingMode::Demo));
        if let Some(credential) = &resolved.credential {
            builder = builder.with_api_key(credential.key.as_str());
        }
        builder.build()
    }

    /// Build and connect a keyed client, failing when no usable model
    /// credential is present in the environment.
    pub async fn connect_from_env(base_url: Option<&str>, timeout: Duration) -> PupResult<Self> {
        let Some(credential) = config::select_credential() else {
            return Err(PupError::config(
                "No model API key configured. Set SYN_API_KEY or OPEN_API_KEY environment variable.",
            ));
        };
        info!("Using {} provider", credential.source.provider_name());

        let mut client = Self::builder()
            .with_base_url(base_url.unwrap_or(config::DEFAULT_BACKEND_URL))
            .with_api_key(credential.key)
            .with_timeout(timeout)
            .build();
        client.connect().await?;
        Ok(client)
    }
}
