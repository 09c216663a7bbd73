//! Chat with live/demo failover

use pup_core::PupClient;
use pup_core::config::{self, OperatingMode};
use pup_core::demo::demo_chat_response;
use pup_core::types::{ChatRequest, ChatResponse};
use tracing::{info, warn};

use super::GatewaySession;
use super::state::{GatewayState, SessionState};

impl GatewaySession {
    /// Answer a chat request. Never errors.
    ///
    /// Live sessions forward the request to the backend; demo sessions and
    /// any live failure produce a canned reply instead. Failures flip the
    /// session to demo state unless a remote backend is forced, in which
    /// case the canned reply covers this call only and the next one
    /// retries.
    pub async fn chat(&self, request: ChatRequest) -> ChatResponse {
        self.refresh_from_env().await;

        let mut session = self.state.write().await;
        let message = request.message.clone();

        if session.state == GatewayState::Demo && !session.forced_live {
            return demo_chat_response(session.flavor, &message);
        }

        if let Err(e) = session.ensure_connected().await {
            warn!("Chat connect failed: {}", e);
            return degrade(&mut session, &message);
        }

        let outcome = match session.client.as_ref() {
            Some(client) => client.chat(request).await,
            None => return demo_chat_response(session.flavor, &message),
        };

        match outcome {
            Ok(response) => {
                session.state = GatewayState::LiveConnected;
                response
            }
            Err(e) => {
                warn!(code = e.error_code(), "Chat failed, falling back to demo: {}", e);
                degrade(&mut session, &message)
            }
        }
    }

    /// Adopt environment changes that arrived after construction.
    ///
    /// When a remote-backend variable is present and the current client
    /// does not match it (different URL, or the session already degraded
    /// to demo), the configuration is re-resolved and the client replaced.
    /// This is the only path that promotes a demoted session back to live.
    pub(super) async fn refresh_from_env(&self) {
        let Some(remote_url) = config::remote_backend_url() else {
            return;
        };
        let normalized = config::normalize_base_url(&remote_url);

        let needs_refresh = {
            let session = self.state.read().await;
            match (&session.client, session.state) {
                (None, _) => true,
                (_, GatewayState::Demo) => true,
                (Some(client), _) => client.base_url() != normalized,
            }
        };
        if !needs_refresh {
            return;
        }

        info!(backend_url = %normalized, "Refreshing Pup client for remote backend");
        let resolved = config::resolve(None);
        let client = PupClient::from_resolved(&resolved);

        let mut session = self.state.write().await;
        session.client = Some(client);
        session.forced_live = resolved.forced_live();
        session.state = if matches!(resolved.mode, OperatingMode::Demo) {
            GatewayState::Demo
        } else {
            GatewayState::LiveDisconnected
        };
    }
}

fn degrade(session: &mut SessionState, message: &str) -> ChatResponse {
    session.mark_disconnected();
    demo_chat_response(session.flavor, message)
}
