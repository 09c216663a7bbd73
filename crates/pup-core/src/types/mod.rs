//! Wire types for Alberto's REST API
//!
//! Field names match the backend contract exactly; request types accept
//! partial JSON bodies (missing flags fall back to their defaults), and
//! optional response fields are omitted from serialized output when absent.

mod agents;
mod chat;
mod files;
mod shell;
mod status;

pub use agents::{AgentRequest, AgentResponse};
pub use chat::{ChatRequest, ChatResponse};
pub use files::{FileInfo, FileOperation, FileOperationKind, FileOperationResult, SearchResult};
pub use shell::{ShellCommand, ShellCommandResult};
pub use status::{PupCapability, PupStatus};
