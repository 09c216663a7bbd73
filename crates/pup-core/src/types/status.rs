//! Status and capability types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description of one of Alberto's capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PupCapability {
    pub name: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

/// Alberto's current status as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PupStatus {
    pub available: bool,
    pub version: String,
    /// Seconds since the backend started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_directory: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<PupCapability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}
