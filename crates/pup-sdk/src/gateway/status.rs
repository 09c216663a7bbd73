//! Status, capability, and health reporting

use chrono::{DateTime, Utc};
use pup_core::VERSION;
use pup_core::types::{PupCapability, PupStatus};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::GatewaySession;
use super::state::GatewayState;

/// Status payload served by the gateway.
///
/// One shape covers every branch of the decision tree; optional fields are
/// omitted from JSON when absent. Live status merges the backend's own
/// report with the gateway's connection overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayStatus {
    pub available: bool,
    pub version: String,
    pub connected: bool,
    pub demo_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<PupCapability>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GatewayStatus {
    fn bare(available: bool, demo_mode: bool) -> Self {
        Self {
            available,
            version: VERSION.to_string(),
            connected: false,
            demo_mode,
            uptime: None,
            current_directory: None,
            capabilities: None,
            last_activity: None,
            message: None,
            error: None,
        }
    }

    /// No client at all.
    fn offline(demo_mode: bool) -> Self {
        Self {
            message: Some("No client available".to_string()),
            ..Self::bare(false, demo_mode)
        }
    }

    /// Healthy demo state.
    fn demo() -> Self {
        Self {
            message: Some("Running in demo mode".to_string()),
            ..Self::bare(true, true)
        }
    }

    /// A live call failed; `error` explains how much detail callers get.
    fn degraded(demo_mode: bool, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::bare(false, demo_mode)
        }
    }

    /// Backend-reported status with the gateway's connection overlay.
    fn from_backend(status: PupStatus, connected: bool, demo_mode: bool) -> Self {
        Self {
            available: status.available,
            version: status.version,
            connected,
            demo_mode,
            uptime: status.uptime,
            current_directory: status.current_directory,
            capabilities: Some(status.capabilities),
            last_activity: status.last_activity,
            message: None,
            error: None,
        }
    }
}

/// Health states reported by the `/health` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Healthy,
    Unhealthy,
    Error,
    DemoMode,
}

impl HealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Unhealthy => "unhealthy",
            HealthState::Error => "error",
            HealthState::DemoMode => "demo_mode",
        }
    }
}

/// Lightweight connection flags for banners and UIs; consulting them never
/// touches the backend.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConnectionFlags {
    pub connected: bool,
    pub demo_mode: bool,
}

impl GatewaySession {
    /// Report status, degrading instead of erroring.
    pub async fn status(&self) -> GatewayStatus {
        self.refresh_from_env().await;

        let mut session = self.state.write().await;

        if session.client.is_none() {
            return GatewayStatus::offline(!session.forced_live);
        }

        if session.state == GatewayState::Demo && !session.forced_live {
            return GatewayStatus::demo();
        }

        if let Err(e) = session.ensure_connected().await {
            warn!("Status connect failed: {}", e);
            session.mark_disconnected();
            return if session.forced_live {
                GatewayStatus::degraded(false, format!("connection_failed: {}", e))
            } else {
                GatewayStatus::degraded(true, "connection_failed")
            };
        }

        let outcome = match session.client.as_mut() {
            Some(client) => client.get_status().await,
            None => return GatewayStatus::offline(!session.forced_live),
        };

        match outcome {
            Ok(status) => {
                session.state = GatewayState::LiveConnected;
                GatewayStatus::from_backend(status, true, false)
            }
            Err(e) => {
                warn!(code = e.error_code(), "Status fetch failed: {}", e);
                session.mark_disconnected();
                if session.forced_live {
                    GatewayStatus::degraded(false, format!("connection_failed: {}", e))
                } else {
                    GatewayStatus::degraded(true, "connection_failed")
                }
            }
        }
    }

    /// Capability names. Falls back to the fixed demo sets on problems.
    pub async fn capabilities(&self) -> Vec<String> {
        let mut session = self.state.write().await;
        let Some(client) = session.client.as_mut() else {
            return vec!["chat".to_string(), "demo_mode".to_string()];
        };
        match client.get_capabilities().await {
            Ok(capabilities) => capabilities,
            Err(_) => vec!["chat".to_string()],
        }
    }

    /// Agent names offered by the backend; empty without one.
    pub async fn agents(&self) -> Vec<String> {
        let session = self.state.read().await;
        let Some(client) = session.client.as_ref() else {
            return Vec::new();
        };
        client.list_agents().await.unwrap_or_default()
    }

    /// Health of the session as a whole.
    pub async fn health(&self) -> HealthState {
        let mut session = self.state.write().await;

        if session.client.is_none() || (session.state == GatewayState::Demo && !session.forced_live)
        {
            return HealthState::DemoMode;
        }
        if session.ensure_connected().await.is_err() {
            return HealthState::Error;
        }
        let Some(client) = session.client.as_mut() else {
            return HealthState::DemoMode;
        };
        if client.health_check().await {
            HealthState::Healthy
        } else {
            HealthState::Unhealthy
        }
    }

    /// Connection flags for the banner: demo-mode and connected bits
    /// without any backend round trip.
    pub async fn connection_flags(&self) -> ConnectionFlags {
        let session = self.state.read().await;
        let demo_mode = match &session.client {
            None => true,
            Some(_) => session.state == GatewayState::Demo && !session.forced_live,
        };
        let connected = session
            .client
            .as_ref()
            .is_some_and(|client| client.is_connected() && !demo_mode);
        ConnectionFlags {
            connected,
            demo_mode,
        }
    }
}
