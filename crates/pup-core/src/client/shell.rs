//! Shell command execution

use super::types::PupClient;
use crate::error::PupResult;
use crate::types::{ShellCommand, ShellCommandResult};

impl PupClient {
    /// Run a shell command on the backend.
    pub async fn run_command(&self, command: ShellCommand) -> PupResult<ShellCommandResult> {
        let payload = self.post_json("/shell", &command).await?;
        Ok(serde_json::from_value(payload)?)
    }
}
