//! Environment-driven configuration for the Pup SDK
//!
//! Alberto deployments are configured entirely through environment
//! variables: where the backend lives, which model-provider credential to
//! use, and whether a keyless backend is acceptable. [`resolve`] turns the
//! current environment into a [`ResolvedConfig`] without ever failing;
//! missing configuration degrades to demo mode instead of erroring.

mod credentials;
mod resolver;

pub use credentials::{CredentialInfo, CredentialSource};
pub(crate) use credentials::mask_api_key;
pub(crate) use resolver::select_credential;
pub use resolver::{
    BackendSource, DEFAULT_BACKEND_URL, OperatingMode, ResolvedConfig, normalize_base_url,
    remote_backend_url, resolve,
};

/// Primary remote-backend URL variable. When set, the backend is
/// authoritative and credential lookup is skipped entirely.
pub const ENV_PRIMARY_BACKEND: &str = "ALBERTO_API_URL";

/// Legacy alias for the remote-backend URL, kept for older deployments.
pub const ENV_LEGACY_BACKEND: &str = "PUP_BACKEND_URL";

/// Syn provider API key (preferred by default).
pub const ENV_SYN_KEY: &str = "SYN_API_KEY";

/// OpenAI provider API key.
pub const ENV_OPENAI_KEY: &str = "OPEN_API_KEY";

/// Which credential variable to try first: `syn` or `openai`.
pub const ENV_PROVIDER_PREFERENCE: &str = "PUP_MODEL_PROVIDER";

/// Truthy values (`1`/`true`/`yes`/`on`) allow a keyless live backend even
/// against a loopback address.
pub const ENV_ALLOW_KEYLESS: &str = "PUP_ALLOW_KEYLESS_BACKEND";

/// Comma-separated `host=ip` pairs pinned into the HTTP client's resolver.
pub const ENV_DNS_OVERRIDES: &str = "PUP_DNS_OVERRIDES";

/// Static access JWT, forwarded verbatim as `Cf-Access-Jwt-Assertion`.
pub const ENV_ACCESS_JWT: &str = "PUP_ACCESS_JWT";

/// Service token id, forwarded verbatim as `CF-Access-Client-Id`.
pub const ENV_ACCESS_CLIENT_ID: &str = "PUP_ACCESS_CLIENT_ID";

/// Service token secret, forwarded verbatim as `CF-Access-Client-Secret`.
pub const ENV_ACCESS_CLIENT_SECRET: &str = "PUP_ACCESS_CLIENT_SECRET";
