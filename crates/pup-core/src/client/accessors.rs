//! Pup client accessor methods

use std::time::Duration;

use super::types::PupClient;
use crate::config::mask_api_key;

impl PupClient {
    /// Backend base URL this client talks to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Masked form of the API key for logs, if one is configured.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_api_key)
    }

    /// Whether this client was built for demo mode.
    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Whether [`PupClient::connect`] has been called without a matching
    /// [`PupClient::close`].
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
