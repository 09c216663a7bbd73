//! Async HTTP client for Alberto's REST API
//!
//! [`PupClient`] wraps the upstream `/api/v1` surface: chat, status and
//! health, file operations, search, shell commands, and agent invocation.
//! Construction goes through [`PupClientBuilder`] or the environment-driven
//! constructors; every request flows through one boundary that maps HTTP
//! failures onto [`crate::error::PupError`].

mod accessors;
mod agents;
mod builder;
mod chat;
mod constructor;
mod files;
mod request;
mod session;
mod shell;
mod status;
mod types;

pub use builder::PupClientBuilder;
pub use types::{DEFAULT_TIMEOUT, PupClient};
