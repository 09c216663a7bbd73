//! Gateway session over the Pup client
//!
//! [`GatewaySession`] is the degrade-gracefully layer between callers (web
//! routes, the CLI) and a [`PupClient`]. Chat and status never error: when
//! the backend is unreachable the session answers with canned demo replies
//! and truthful status payloads, and flips itself back to live operation
//! when a remote backend is configured through the environment.

mod chat;
mod probe;
mod state;
mod status;

pub use state::GatewayState;
pub use status::{ConnectionFlags, GatewayStatus, HealthState};

use pup_core::PupClient;
use pup_core::config::{self, OperatingMode};
use pup_core::demo::DemoFlavor;
use tokio::sync::RwLock;

use state::SessionState;

/// Always-answering chat session with live/demo failover.
///
/// The session is cheap to share: every method takes `&self` and internal
/// state lives behind one async lock, so one `Arc<GatewaySession>` can
/// back all routes of a web server.
pub struct GatewaySession {
    state: RwLock<SessionState>,
}

impl GatewaySession {
    /// Build a session from the environment.
    ///
    /// The configuration resolver decides the starting point: demo mode
    /// when nothing usable is configured, otherwise a live session that
    /// still has to be connected (see [`GatewaySession::startup_probe`]).
    pub fn from_env() -> Self {
        let resolved = config::resolve(None);
        let client = PupClient::from_resolved(&resolved);
        let state = if matches!(resolved.mode, OperatingMode::Demo) {
            GatewayState::Demo
        } else {
            GatewayState::LiveDisconnected
        };

        Self {
            state: RwLock::new(SessionState {
                client: Some(client),
                state,
                flavor: DemoFlavor::Fallback,
                forced_live: resolved.forced_live(),
            }),
        }
    }

    /// Build a session around an explicit client, mainly for embedding and
    /// tests. A missing or demo-mode client starts in demo state.
    pub fn new(client: Option<PupClient>, flavor: DemoFlavor) -> Self {
        let state = match &client {
            Some(c) if !c.demo_mode() => GatewayState::LiveDisconnected,
            _ => GatewayState::Demo,
        };

        Self {
            state: RwLock::new(SessionState {
                client,
                state,
                flavor,
                forced_live: false,
            }),
        }
    }

    /// Session for the standalone demo deployment: pinned to demo state
    /// with the scripted keyword responder.
    pub fn scripted() -> Self {
        let client = PupClient::builder().with_demo_mode(true).build();
        Self::new(Some(client), DemoFlavor::Scripted)
    }

    /// Current state of the live/demo state machine.
    pub async fn current_state(&self) -> GatewayState {
        self.state.read().await.state
    }

    /// Shut down the underlying HTTP session, if any.
    pub async fn close(&self) {
        let mut session = self.state.write().await;
        if let Some(client) = session.client.as_mut() {
            client.close();
        }
    }
}
