//! Pup SDK Core Library
//!
//! This crate provides the core functionality for talking to Alberto the
//! code puppy: environment-driven configuration resolution, the async HTTP
//! client for Alberto's REST API, the wire types, and the demo responder
//! used when no backend is reachable.

pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

/// Crate version, reported by the web interface and the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types
pub use client::{PupClient, PupClientBuilder};
pub use config::{
    BackendSource, CredentialInfo, CredentialSource, OperatingMode, ResolvedConfig, resolve,
};
pub use error::{PupError, PupResult};
pub use types::*;
