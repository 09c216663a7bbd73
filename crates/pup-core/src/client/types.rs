//! Pup client type definitions

use std::time::{Duration, Instant};

use crate::config::mask_api_key;
use crate::types::PupStatus;

/// Default per-request timeout for upstream calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How long a fetched status is served from memory before the backend is
/// asked again.
pub(super) const STATUS_CACHE_TTL: Duration = Duration::from_secs(30);

/// Async client for Alberto's REST API.
///
/// The client is cheap to build and does not touch the network until
/// [`PupClient::connect`] creates the HTTP session. Requests made before
/// that fail with a connection error.
///
/// # Examples
///
/// ```no_run
/// use pup_core::client::PupClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = PupClient::builder()
///     .with_base_url("http://localhost:8080")
///     .with_api_key("sk-test")
///     .build();
/// client.connect().await?;
///
/// let reply = client.say_woof("hello!").await?;
/// println!("{}", reply.response);
/// # Ok(())
/// # }
/// ```
pub struct PupClient {
    pub(super) base_url: String,
    pub(super) api_key: Option<String>,
    pub(super) timeout: Duration,
    pub(super) demo_mode: bool,
    pub(super) connected: bool,
    pub(super) http: Option<reqwest::Client>,
    pub(super) status_cache: Option<(PupStatus, Instant)>,
}

impl std::fmt::Debug for PupClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PupClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("timeout", &self.timeout)
            .field("demo_mode", &self.demo_mode)
            .field("connected", &self.connected)
            .finish_non_exhaustive()
    }
}
