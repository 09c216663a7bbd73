//! Credential lookup with source tracking
//!
//! A credential is only "usable" when its variable is set and non-empty
//! after trimming whitespace; deployments regularly export empty strings to
//! mean "unset" and those must not count as keys.

use std::env;

use super::{ENV_OPENAI_KEY, ENV_SYN_KEY};

/// Which environment variable supplied the API key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// From the `SYN_API_KEY` environment variable
    SynEnv,
    /// From the `OPEN_API_KEY` environment variable
    OpenAiEnv,
}

impl CredentialSource {
    /// Name of the environment variable behind this source
    pub fn env_var(&self) -> &'static str {
        match self {
            CredentialSource::SynEnv => ENV_SYN_KEY,
            CredentialSource::OpenAiEnv => ENV_OPENAI_KEY,
        }
    }

    /// Provider name used in logs and the preference variable
    pub fn provider_name(&self) -> &'static str {
        match self {
            CredentialSource::SynEnv => "syn",
            CredentialSource::OpenAiEnv => "openai",
        }
    }
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} env", self.env_var())
    }
}

/// An API key together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialInfo {
    /// The key exactly as the environment supplied it
    pub key: String,
    /// Which variable it was read from
    pub source: CredentialSource,
}

impl CredentialInfo {
    /// Read this source's variable, returning the credential only when it
    /// is usable (set and non-empty after trimming).
    pub fn from_env(source: CredentialSource) -> Option<Self> {
        match env::var(source.env_var()) {
            Ok(key) if !key.trim().is_empty() => Some(Self { key, source }),
            _ => None,
        }
    }

    /// Masked rendering of the key for logs
    pub fn masked_key(&self) -> String {
        mask_api_key(&self.key)
    }
}

/// Mask an API key for safe display
///
/// Shows first 8 and last 4 characters, masks the rest with asterisks.
pub(crate) fn mask_api_key(key: &str) -> String {
    let len = key.len();
    if len <= 12 {
        // Too short to mask meaningfully
        return "*".repeat(len);
    }

    let prefix = &key[..8];
    let suffix = &key[len - 4..];
    let mask_len = len - 12;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(
            mask_api_key("sk-proj-abc123xyz789defg"),
            "sk-proj-********...defg"
        );
        assert_eq!(mask_api_key("short"), "*****");
        assert_eq!(mask_api_key(""), "");
    }

    #[test]
    fn test_source_env_vars() {
        assert_eq!(CredentialSource::SynEnv.env_var(), "SYN_API_KEY");
        assert_eq!(CredentialSource::OpenAiEnv.env_var(), "OPEN_API_KEY");
        assert_eq!(CredentialSource::SynEnv.provider_name(), "syn");
        assert_eq!(CredentialSource::OpenAiEnv.provider_name(), "openai");
    }
}
