//! From trait implementations for PupError conversions

use super::types::PupError;

impl From<reqwest::Error> for PupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout(error.to_string())
        } else if error.is_decode() {
            Self::protocol(error.to_string())
        } else {
            Self::connection(error.to_string())
        }
    }
}

impl From<serde_json::Error> for PupError {
    fn from(error: serde_json::Error) -> Self {
        Self::protocol(error.to_string())
    }
}
