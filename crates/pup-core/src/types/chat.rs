//! Chat request/response types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chat request to Alberto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Message to send; the backend rejects empty messages
    pub message: String,
    /// Optional free-form context forwarded to the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    /// Whether the reply should include the agent's reasoning
    #[serde(default)]
    pub include_reasoning: bool,
    /// Whether the agent may execute suggested commands itself
    #[serde(default)]
    pub auto_execute: bool,
}

impl ChatRequest {
    /// Create a request with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            include_reasoning: false,
            auto_execute: false,
        }
    }

    /// Attach context to the request
    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Ask for the agent's reasoning in the reply
    pub fn with_reasoning(mut self, include: bool) -> Self {
        self.include_reasoning = include;
        self
    }

    /// Allow the agent to execute suggested commands
    pub fn with_auto_execute(mut self, auto: bool) -> Self {
        self.auto_execute = auto;
        self
    }
}

/// Chat response from Alberto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    /// Commands the agent executed while answering
    #[serde(default)]
    pub commands_executed: Vec<serde_json::Value>,
    /// Seconds the agent spent on the reply
    pub execution_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_usage: Option<HashMap<String, u64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_request_body_uses_defaults() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(request.message, "hello");
        assert!(request.context.is_none());
        assert!(!request.include_reasoning);
        assert!(!request.auto_execute);
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let response = ChatResponse {
            success: true,
            response: "woof".to_string(),
            reasoning: None,
            commands_executed: Vec::new(),
            execution_time: 0.1,
            token_usage: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("reasoning").is_none());
        assert!(json.get("token_usage").is_none());
        assert_eq!(json["commands_executed"], serde_json::json!([]));
    }

    #[test]
    fn test_builder_methods() {
        let request = ChatRequest::new("fix the bug")
            .with_context(serde_json::json!({"file": "main.rs"}))
            .with_reasoning(true);
        assert!(request.include_reasoning);
        assert!(!request.auto_execute);
        assert_eq!(request.context.unwrap()["file"], "main.rs");
    }
}
