//! Chat operations

use super::types::PupClient;
use crate::error::PupResult;
use crate::types::{ChatRequest, ChatResponse};

impl PupClient {
    /// Send a chat message and return Alberto's reply.
    pub async fn say_woof(&self, message: &str) -> PupResult<ChatResponse> {
        self.chat(ChatRequest::new(message)).await
    }

    /// Send a fully specified chat request.
    pub async fn chat(&self, request: ChatRequest) -> PupResult<ChatResponse> {
        let payload = self.post_json("/chat", &request).await?;
        Ok(serde_json::from_value(payload)?)
    }
}
