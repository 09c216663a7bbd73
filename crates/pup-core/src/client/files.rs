//! File and search operations

use serde_json::Value;

use super::types::PupClient;
use crate::error::{PupError, PupResult};
use crate::types::{FileInfo, FileOperation, FileOperationResult, SearchResult};

impl PupClient {
    /// List files under a directory.
    pub async fn list_files(&self, directory: &str, recursive: bool) -> PupResult<Vec<FileInfo>> {
        let result = self
            .file_operation(FileOperation::list(directory, recursive), "File listing failed")
            .await?;
        Ok(result.files.unwrap_or_default())
    }

    /// Read a file, optionally restricted to a line range.
    pub async fn read_file(
        &self,
        file_path: &str,
        start_line: Option<u32>,
        num_lines: Option<u32>,
    ) -> PupResult<String> {
        let result = self
            .file_operation(
                FileOperation::read(file_path, start_line, num_lines),
                "File read failed",
            )
            .await?;
        Ok(result.content.unwrap_or_default())
    }

    /// Write content to a file.
    pub async fn write_file(&self, file_path: &str, content: &str, overwrite: bool) -> PupResult<()> {
        self.file_operation(
            FileOperation::write(file_path, content, overwrite),
            "File write failed",
        )
        .await?;
        Ok(())
    }

    /// Delete a file.
    pub async fn delete_file(&self, file_path: &str) -> PupResult<()> {
        self.file_operation(FileOperation::delete(file_path), "File deletion failed")
            .await?;
        Ok(())
    }

    /// Search file contents for a text pattern.
    ///
    /// `directory` defaults to `"."` and `max_results` to 100 when not
    /// given.
    pub async fn search_files(
        &self,
        query: &str,
        directory: Option<&str>,
        max_results: Option<u32>,
    ) -> PupResult<Vec<SearchResult>> {
        let params = [
            ("q", query.to_string()),
            ("directory", directory.unwrap_or(".").to_string()),
            ("max_results", max_results.unwrap_or(100).to_string()),
        ];
        let payload = self.get_json("/search", Some(&params)).await?;
        let results = payload
            .get("results")
            .cloned()
            .unwrap_or(Value::Array(Vec::new()));
        Ok(serde_json::from_value(results)?)
    }

    /// One `/files` round trip, surfacing backend-reported failures as
    /// application errors.
    async fn file_operation(
        &self,
        operation: FileOperation,
        failure: &str,
    ) -> PupResult<FileOperationResult> {
        let payload = self.post_json("/files", &operation).await?;
        let result: FileOperationResult = serde_json::from_value(payload)?;
        if !result.success {
            let message = result.error.as_deref().unwrap_or(failure);
            return Err(PupError::application(message, None));
        }
        Ok(result)
    }
}
