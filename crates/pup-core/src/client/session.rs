//! HTTP session lifecycle
//!
//! The `reqwest` client is created lazily on [`PupClient::connect`] so
//! builder construction stays infallible. Session construction is also
//! where the environment-driven transport extras apply: trust-proxy access
//! headers forwarded verbatim, and DNS pinning for deployments whose
//! backend hostname does not resolve publicly.

use std::env;
use std::net::{IpAddr, SocketAddr};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{info, warn};

use super::types::PupClient;
use crate::config;
use crate::error::{PupError, PupResult};

impl PupClient {
    /// Create the HTTP session if absent and mark the client connected.
    ///
    /// No probe is sent; use [`PupClient::test_connection`] to check that
    /// the backend actually answers.
    pub async fn connect(&mut self) -> PupResult<()> {
        if self.http.is_none() {
            self.http = Some(self.build_http_client()?);
        }
        self.connected = true;
        info!(base_url = %self.base_url, "HTTP session created for Alberto");
        Ok(())
    }

    /// Drop the HTTP session and mark the client disconnected.
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            info!("Disconnected from Alberto");
        }
        self.connected = false;
    }

    fn build_http_client(&self) -> PupResult<reqwest::Client> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);

        let headers = access_headers_from_env();
        if !headers.is_empty() {
            builder = builder.default_headers(headers);
        }
        for (host, addr) in dns_overrides_from_env() {
            builder = builder.resolve(&host, addr);
        }

        builder
            .build()
            .map_err(|e| PupError::connection(format!("Failed to create HTTP client: {}", e)))
    }
}

/// Trust-proxy headers passed through from the environment verbatim.
fn access_headers_from_env() -> HeaderMap {
    const ACCESS_HEADERS: [(&str, &str); 3] = [
        (config::ENV_ACCESS_JWT, "cf-access-jwt-assertion"),
        (config::ENV_ACCESS_CLIENT_ID, "cf-access-client-id"),
        (config::ENV_ACCESS_CLIENT_SECRET, "cf-access-client-secret"),
    ];

    let mut headers = HeaderMap::new();
    for (var, header) in ACCESS_HEADERS {
        let Ok(value) = env::var(var) else { continue };
        if value.is_empty() {
            continue;
        }
        match HeaderValue::from_str(&value) {
            Ok(mut parsed) => {
                parsed.set_sensitive(true);
                headers.insert(HeaderName::from_static(header), parsed);
            }
            Err(_) => warn!(var, "access header value is not a valid header value, skipping"),
        }
    }
    headers
}

fn dns_overrides_from_env() -> Vec<(String, SocketAddr)> {
    match env::var(config::ENV_DNS_OVERRIDES) {
        Ok(raw) => parse_dns_overrides(&raw),
        Err(_) => Vec::new(),
    }
}

/// Parse comma-separated `host=ip` pairs, skipping malformed entries.
///
/// The socket port is a placeholder; reqwest takes the port from the
/// request URL.
pub(super) fn parse_dns_overrides(raw: &str) -> Vec<(String, SocketAddr)> {
    let mut overrides = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let parsed = entry
            .split_once('=')
            .map(|(host, ip)| (host.trim(), ip.trim().parse::<IpAddr>()));
        match parsed {
            Some((host, Ok(ip))) if !host.is_empty() => {
                overrides.push((host.to_string(), SocketAddr::new(ip, 0)));
            }
            _ => warn!(entry, "ignoring malformed DNS override"),
        }
    }
    overrides
}
