//! Agent invocation

use serde_json::Value;

use super::types::PupClient;
use crate::error::PupResult;
use crate::types::{AgentRequest, AgentResponse};

impl PupClient {
    /// Invoke a named agent with a prompt.
    pub async fn invoke_agent(&self, request: AgentRequest) -> PupResult<AgentResponse> {
        let payload = self.post_json("/agents", &request).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// List the agents the backend offers.
    pub async fn list_agents(&self) -> PupResult<Vec<String>> {
        let payload = self.get_json("/agents", None).await?;
        let agents = payload
            .get("agents")
            .cloned()
            .unwrap_or(Value::Array(Vec::new()));
        Ok(serde_json::from_value(agents)?)
    }
}
