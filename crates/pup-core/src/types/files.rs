//! File operation and search types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about a file or directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub is_file: bool,
    pub is_directory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
}

/// Kind of file operation requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperationKind {
    List,
    Read,
    Write,
    Delete,
}

impl std::fmt::Display for FileOperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperationKind::List => write!(f, "list"),
            FileOperationKind::Read => write!(f, "read"),
            FileOperationKind::Write => write!(f, "write"),
            FileOperationKind::Delete => write!(f, "delete"),
        }
    }
}

/// File operation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOperation {
    pub operation: FileOperationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub recursive: bool,
    /// 1-based start line for read operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_lines: Option<u32>,
    #[serde(default)]
    pub overwrite: bool,
}

impl FileOperation {
    /// List the contents of a directory
    pub fn list(directory: impl Into<String>, recursive: bool) -> Self {
        Self {
            operation: FileOperationKind::List,
            file_path: None,
            directory: Some(directory.into()),
            content: None,
            recursive,
            start_line: None,
            num_lines: None,
            overwrite: false,
        }
    }

    /// Read a file, optionally a line range
    pub fn read(
        file_path: impl Into<String>,
        start_line: Option<u32>,
        num_lines: Option<u32>,
    ) -> Self {
        Self {
            operation: FileOperationKind::Read,
            file_path: Some(file_path.into()),
            directory: None,
            content: None,
            recursive: false,
            start_line,
            num_lines,
            overwrite: false,
        }
    }

    /// Write content to a file
    pub fn write(file_path: impl Into<String>, content: impl Into<String>, overwrite: bool) -> Self {
        Self {
            operation: FileOperationKind::Write,
            file_path: Some(file_path.into()),
            directory: None,
            content: Some(content.into()),
            recursive: false,
            start_line: None,
            num_lines: None,
            overwrite,
        }
    }

    /// Delete a file
    pub fn delete(file_path: impl Into<String>) -> Self {
        Self {
            operation: FileOperationKind::Delete,
            file_path: Some(file_path.into()),
            directory: None,
            content: None,
            recursive: false,
            start_line: None,
            num_lines: None,
            overwrite: false,
        }
    }
}

/// Result of a file operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOperationResult {
    pub success: bool,
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Search hit from a grep-style file search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub file_path: String,
    pub line_number: u32,
    pub line_content: String,
    pub match_start: usize,
    pub match_end: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_serializes_lowercase() {
        let operation = FileOperation::list(".", true);
        let json = serde_json::to_value(&operation).unwrap();
        assert_eq!(json["operation"], "list");
        assert_eq!(json["recursive"], true);
        assert!(json.get("file_path").is_none());
    }

    #[test]
    fn test_read_operation_carries_line_range() {
        let operation = FileOperation::read("src/main.rs", Some(10), Some(5));
        let json = serde_json::to_value(&operation).unwrap();
        assert_eq!(json["operation"], "read");
        assert_eq!(json["start_line"], 10);
        assert_eq!(json["num_lines"], 5);
    }
}
