//! Status, health, and readiness operations

use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::types::{PupClient, STATUS_CACHE_TTL};
use crate::error::PupResult;
use crate::types::PupStatus;

impl PupClient {
    /// Fetch Alberto's status, served from a short-lived memo.
    ///
    /// A fetched status is reused for 30 seconds so status-heavy callers
    /// (health endpoints, capability lookups) do not hammer the backend.
    pub async fn get_status(&mut self) -> PupResult<PupStatus> {
        if let Some((cached, fetched_at)) = &self.status_cache {
            if fetched_at.elapsed() < STATUS_CACHE_TTL {
                return Ok(cached.clone());
            }
        }

        let payload = self.get_json("/status", None).await?;
        let status: PupStatus = serde_json::from_value(payload)?;
        self.status_cache = Some((status.clone(), Instant::now()));
        Ok(status)
    }

    /// Whether Alberto reports itself available. Never errors.
    pub async fn health_check(&mut self) -> bool {
        match self.get_status().await {
            Ok(status) => status.available,
            Err(_) => false,
        }
    }

    /// Names of the capabilities the backend reports as enabled.
    pub async fn get_capabilities(&mut self) -> PupResult<Vec<String>> {
        let status = self.get_status().await?;
        Ok(status
            .capabilities
            .into_iter()
            .filter(|cap| cap.enabled)
            .map(|cap| cap.name)
            .collect())
    }

    /// Probe the backend once, reporting success without erroring.
    pub async fn test_connection(&mut self) -> bool {
        match self.get_status().await {
            Ok(_) => {
                info!(base_url = %self.base_url, "Connection test successful");
                true
            }
            Err(e) => {
                warn!("Connection test failed: {}", e);
                false
            }
        }
    }

    /// Poll [`PupClient::health_check`] once a second until the backend
    /// answers or `timeout` elapses.
    pub async fn wait_until_ready(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.health_check().await {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}
