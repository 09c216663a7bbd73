//! Fluent construction of [`PupClient`]

use std::time::Duration;

use super::types::{DEFAULT_TIMEOUT, PupClient};
use crate::config::{DEFAULT_BACKEND_URL, normalize_base_url};

/// Builder for [`PupClient`].
///
/// Defaults: `http://localhost:8080`, no API key, 60 second timeout,
/// demo mode off.
#[derive(Clone)]
pub struct PupClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    demo_mode: bool,
}

impl Default for PupClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            demo_mode: false,
        }
    }
}

impl PupClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Authenticate requests with a bearer API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Mark the client as demo-mode only, never expected to reach a live
    /// backend.
    pub fn with_demo_mode(mut self, demo_mode: bool) -> Self {
        self.demo_mode = demo_mode;
        self
    }

    /// Finish the builder. Never fails; the HTTP session is created later
    /// by [`PupClient::connect`].
    pub fn build(self) -> PupClient {
        PupClient {
            base_url: normalize_base_url(&self.base_url),
            api_key: self.api_key,
            timeout: self.timeout,
            demo_mode: self.demo_mode,
            connected: false,
            http: None,
            status_cache: None,
        }
    }
}
