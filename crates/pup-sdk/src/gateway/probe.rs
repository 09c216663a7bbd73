//! Boot-time connection probe

use tracing::{info, warn};

use super::GatewaySession;
use super::state::GatewayState;

impl GatewaySession {
    /// Try to bring the session live once at startup.
    ///
    /// Demo sessions only log that they are demo. Live sessions log how
    /// they are configured (masked key or keyless, backend URL) and open
    /// the HTTP session; on failure the session either falls back to demo
    /// or, when a remote backend is forced, stays live and retries per
    /// request.
    pub async fn startup_probe(&self) {
        let mut session = self.state.write().await;

        if session.state == GatewayState::Demo && !session.forced_live {
            info!("Alberto running in demo mode - no API key configured");
            return;
        }

        if let Some(client) = session.client.as_ref() {
            match client.masked_api_key() {
                Some(masked) => info!(api_key = %masked, "Alberto client created with API key"),
                None => info!("Alberto client created without API key (keyless backend)"),
            }
            info!(backend_url = %client.base_url(), "Alberto backend URL");
        }

        match session.ensure_connected().await {
            Ok(()) => info!("Alberto client connected successfully"),
            Err(e) => {
                warn!("Failed to connect Alberto client: {}", e);
                session.mark_disconnected();
                if session.forced_live {
                    info!("Remote backend configured; staying in live mode and will retry per request");
                } else {
                    info!("Falling back to demo mode due to connection failure");
                }
            }
        }
    }
}
