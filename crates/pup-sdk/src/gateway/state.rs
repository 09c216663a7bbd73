//! Gateway state machine

use pup_core::PupClient;
use pup_core::demo::DemoFlavor;
use pup_core::error::{PupError, PupResult};

/// Where the session currently stands.
///
/// `Demo` is sticky for sessions that are not forced live: once a live
/// session degrades, only a changed remote-backend environment variable
/// promotes it back (picked up by the per-request refresh).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayState {
    /// Serving canned replies; no backend involved.
    Demo,
    /// Live configuration without an open (or trusted) session.
    LiveDisconnected,
    /// Live and the last backend call succeeded.
    LiveConnected,
}

pub(super) struct SessionState {
    pub(super) client: Option<PupClient>,
    pub(super) state: GatewayState,
    pub(super) flavor: DemoFlavor,
    /// A remote-backend variable is set; never fall back to demo state.
    pub(super) forced_live: bool,
}

impl SessionState {
    /// Open the client's HTTP session if it is not already open.
    ///
    /// Opening is local construction work and does not probe the backend;
    /// a reachable-looking session can still fail on first use.
    pub(super) async fn ensure_connected(&mut self) -> PupResult<()> {
        let Some(client) = self.client.as_mut() else {
            return Err(PupError::connection("No client available"));
        };
        if client.is_connected() {
            return Ok(());
        }
        client.connect().await?;
        self.state = GatewayState::LiveConnected;
        Ok(())
    }

    /// Drop the HTTP session after a failure and pick the follow-up state:
    /// demo for ordinary sessions, live-disconnected when forced live.
    pub(super) fn mark_disconnected(&mut self) {
        if let Some(client) = self.client.as_mut() {
            client.close();
        }
        self.state = if self.forced_live {
            GatewayState::LiveDisconnected
        } else {
            GatewayState::Demo
        };
    }
}
