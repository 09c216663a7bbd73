//! Pup SDK
//!
//! High-level entry point for embedding Alberto the code puppy. The central
//! type is [`GatewaySession`]: a shareable, always-answering session that
//! serves live backend replies when a backend is reachable and canned demo
//! replies when it is not. The web interface and the CLI are both built on
//! top of it.
//!
//! # Example
//!
//! ```no_run
//! use pup_sdk::GatewaySession;
//! use pup_sdk::ChatRequest;
//!
//! # async fn example() {
//! let session = GatewaySession::from_env();
//! session.startup_probe().await;
//!
//! let reply = session.chat(ChatRequest::new("hello!")).await;
//! println!("{}", reply.response);
//! # }
//! ```

pub mod gateway;

#[cfg(test)]
pub(crate) mod test_support;

pub use gateway::{
    ConnectionFlags, GatewaySession, GatewayState, GatewayStatus, HealthState,
};

// Re-export commonly used types from core
pub use pup_core::demo::DemoFlavor;
pub use pup_core::error::{PupError, PupResult};
pub use pup_core::types::{ChatRequest, ChatResponse, PupCapability, PupStatus};
pub use pup_core::{PupClient, PupClientBuilder};
