//! Backend/credential resolution from the process environment
//!
//! [`resolve`] is a pure, deterministic mapping from environment variables
//! to a [`ResolvedConfig`]. It performs no I/O, never fails, and calling it
//! twice under an identical environment yields an identical result. Absent
//! configuration degrades to demo mode rather than failing startup.

use std::env;

use tracing::info;

use super::credentials::{CredentialInfo, CredentialSource};
use super::{ENV_ALLOW_KEYLESS, ENV_LEGACY_BACKEND, ENV_PRIMARY_BACKEND, ENV_PROVIDER_PREFERENCE};

/// Fallback backend URL when nothing is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Values of [`ENV_ALLOW_KEYLESS`] that count as true
const TRUE_VALUES: [&str; 4] = ["1", "true", "yes", "on"];

/// How the gateway talks to Alberto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Direct calls to a model provider using a configured credential
    LiveDirect,
    /// Calls go to a remote Alberto backend which holds its own credentials
    LiveBackend,
    /// No backend, no credential: responses are synthesized locally
    Demo,
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatingMode::LiveDirect => write!(f, "live-direct"),
            OperatingMode::LiveBackend => write!(f, "live-backend"),
            OperatingMode::Demo => write!(f, "demo"),
        }
    }
}

/// Which precedence branch produced the backend URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendSource {
    /// `ALBERTO_API_URL`
    PrimaryEnv,
    /// `PUP_BACKEND_URL`
    LegacyEnv,
    /// Caller-supplied base URL
    Explicit,
    /// Hardcoded `http://localhost:8080`
    Default,
}

/// Immutable result of one resolution pass
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Normalized backend base URL (no trailing slash)
    pub backend_url: String,
    /// Which precedence branch supplied the URL
    pub backend_source: BackendSource,
    /// API key, present only in live-direct mode
    pub credential: Option<CredentialInfo>,
    /// Operating mode decided for this environment
    pub mode: OperatingMode,
}

impl ResolvedConfig {
    /// Whether the backend URL was explicitly set in the environment.
    ///
    /// A forced-live config never degrades permanently to demo mode: the
    /// backend's unreachability might be transient infrastructure trouble,
    /// so the gateway retries per request instead.
    pub fn forced_live(&self) -> bool {
        matches!(
            self.backend_source,
            BackendSource::PrimaryEnv | BackendSource::LegacyEnv
        )
    }
}

/// Resolve backend URL, credential, and operating mode from the current
/// process environment.
///
/// Backend URL precedence: `ALBERTO_API_URL`, then `PUP_BACKEND_URL`, then
/// `explicit_base_url`, then [`DEFAULT_BACKEND_URL`]. A remote-backend
/// variable counts only when non-empty after trimming.
pub fn resolve(explicit_base_url: Option<&str>) -> ResolvedConfig {
    let (raw_url, backend_source) = match remote_backend_url_with_source() {
        Some((url, source)) => (url, source),
        None => match explicit_base_url.map(str::trim) {
            Some(url) if !url.is_empty() => (url.to_string(), BackendSource::Explicit),
            _ => (DEFAULT_BACKEND_URL.to_string(), BackendSource::Default),
        },
    };
    let backend_url = normalize_base_url(&raw_url);

    // An explicitly configured remote backend is authoritative: it holds its
    // own credentials, so key lookup is skipped entirely.
    if matches!(
        backend_source,
        BackendSource::PrimaryEnv | BackendSource::LegacyEnv
    ) {
        info!(url = %backend_url, "using remote Alberto backend from environment");
        return ResolvedConfig {
            backend_url,
            backend_source,
            credential: None,
            mode: OperatingMode::LiveBackend,
        };
    }

    if let Some(credential) = select_credential() {
        info!(
            provider = credential.source.provider_name(),
            key = %credential.masked_key(),
            "using direct model provider credential"
        );
        return ResolvedConfig {
            backend_url,
            backend_source,
            credential: Some(credential),
            mode: OperatingMode::LiveDirect,
        };
    }

    if !is_loopback_host(&backend_url) || allow_keyless() {
        info!(url = %backend_url, "no credential configured, using keyless backend");
        return ResolvedConfig {
            backend_url,
            backend_source,
            credential: None,
            mode: OperatingMode::LiveBackend,
        };
    }

    info!("no backend or credential configured, running in demo mode");
    ResolvedConfig {
        backend_url,
        backend_source,
        credential: None,
        mode: OperatingMode::Demo,
    }
}

/// Remote backend URL from the environment, if one is configured.
///
/// Checks `ALBERTO_API_URL` first, then `PUP_BACKEND_URL`; empty values
/// mean unset.
pub fn remote_backend_url() -> Option<String> {
    remote_backend_url_with_source().map(|(url, _)| url)
}

fn remote_backend_url_with_source() -> Option<(String, BackendSource)> {
    non_empty_env(ENV_PRIMARY_BACKEND)
        .map(|url| (url, BackendSource::PrimaryEnv))
        .or_else(|| non_empty_env(ENV_LEGACY_BACKEND).map(|url| (url, BackendSource::LegacyEnv)))
}

/// Strip the trailing slash so URL comparisons and path joins are uniform
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn non_empty_env(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}

/// Pick a usable credential, honoring the provider preference.
///
/// `PUP_MODEL_PROVIDER` names the variable tried first (`syn` or `openai`);
/// the other one is the fallback. Unset or unrecognized preferences use the
/// historical default order: Syn first, then OpenAI.
pub(crate) fn select_credential() -> Option<CredentialInfo> {
    let preference = env::var(ENV_PROVIDER_PREFERENCE)
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_default();

    let order = match preference.as_str() {
        "openai" => [CredentialSource::OpenAiEnv, CredentialSource::SynEnv],
        _ => [CredentialSource::SynEnv, CredentialSource::OpenAiEnv],
    };

    order.into_iter().find_map(CredentialInfo::from_env)
}

/// Whether the URL's host is a loopback address (`localhost`/`127.0.0.1`,
/// any scheme). Unparseable URLs count as non-loopback.
fn is_loopback_host(url: &str) -> bool {
    match reqwest::Url::parse(url) {
        Ok(parsed) => matches!(parsed.host_str(), Some("localhost") | Some("127.0.0.1")),
        Err(_) => false,
    }
}

fn allow_keyless() -> bool {
    match env::var(ENV_ALLOW_KEYLESS) {
        Ok(value) => TRUE_VALUES.contains(&value.trim().to_lowercase().as_str()),
        Err(_) => false,
    }
}
