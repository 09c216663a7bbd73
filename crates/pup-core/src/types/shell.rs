//! Shell command types

use serde::{Deserialize, Serialize};

/// Shell command request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellCommand {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    /// Seconds before the backend kills the command (1..=300)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_true")]
    pub capture_output: bool,
}

impl ShellCommand {
    /// Create a command with default timeout and output capture
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            working_directory: None,
            timeout: default_timeout(),
            capture_output: true,
        }
    }

    /// Run the command from a specific directory
    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Override the execution timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

/// Result of shell command execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellCommandResult {
    pub success: bool,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    pub execution_time: f64,
    #[serde(default)]
    pub timeout: bool,
    #[serde(default)]
    pub user_interrupted: bool,
}

fn default_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_defaults() {
        let command: ShellCommand = serde_json::from_str(r#"{"command": "ls -la"}"#).unwrap();
        assert_eq!(command.timeout, 60);
        assert!(command.capture_output);
        assert!(command.working_directory.is_none());
    }
}
