//! Request boundary shared by every API call

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use super::types::PupClient;
use crate::error::{PupError, PupResult};

/// Path prefix of the versioned REST surface.
const API_PREFIX: &str = "/api/v1";

impl PupClient {
    pub(super) fn http(&self) -> PupResult<&reqwest::Client> {
        self.http
            .as_ref()
            .ok_or_else(|| PupError::connection("Not connected to Alberto. Call connect() first."))
    }

    /// Send one request to the versioned API and decode the JSON reply.
    ///
    /// Status mapping: 401 becomes an auth error, 408 a timeout, 5xx a
    /// connection error, and any other 4xx an application error carrying
    /// the body's `error` field. Transport timeouts and JSON decode
    /// failures map through [`PupError`]'s `reqwest` conversion.
    #[instrument(skip(self, body, query), level = "debug")]
    pub(super) async fn send_request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        query: Option<&[(&str, String)]>,
    ) -> PupResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, endpoint);

        let mut request = self.http()?.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(PupError::auth("Invalid API key"));
        }
        if status == StatusCode::REQUEST_TIMEOUT {
            return Err(PupError::timeout("Request timeout"));
        }
        if status.is_server_error() {
            return Err(PupError::connection(format!(
                "Server error: {}",
                status.as_u16()
            )));
        }

        let payload: Value = response.json().await?;

        if status.is_client_error() {
            let message = payload
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(PupError::application(message, Some(status.as_u16())));
        }

        Ok(payload)
    }

    pub(super) async fn get_json(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
    ) -> PupResult<Value> {
        self.send_request::<Value>(Method::GET, endpoint, None, query)
            .await
    }

    pub(super) async fn post_json<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> PupResult<Value> {
        self.send_request(Method::POST, endpoint, Some(body), None)
            .await
    }
}
