//! Uploaded files and linked files

use crate::client::ShortcutClient;
use crate::error::{Result, ShortcutError};
use crate::transport::FormPart;
use crate::types::id::resource_path;
use crate::types::{CreateLinkedFileInput, File, LinkedFile, UpdateFileInput, UpdateLinkedFileInput, UploadFile};

impl ShortcutClient {
    // ==================== FILES ====================

    /// Files uploaded to the workspace
    pub fn list_files(&self) -> Result<Vec<File>> {
        self.get("/files")
    }

    /// Uploads files in one multipart request
    ///
    /// # API endpoint
    ///
    /// `POST /files` (`multipart/form-data`)
    ///
    /// # Arguments
    ///
    /// - `files`: sent as parts `file0`, `file1`, ... in order
    /// - `story_id`: story to attach the files to, if any
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<File>)`: one record per uploaded file
    ///
    /// # Errors
    ///
    /// - **ValidationFailed**: `files` is empty, or a content type is not a valid MIME type
    pub fn upload_files(&self, files: Vec<UploadFile>, story_id: Option<i64>) -> Result<Vec<File>> {
        if files.is_empty() {
            return Err(ShortcutError::invalid_argument("at least one file is required"));
        }

        let mut parts: Vec<FormPart> = files
            .into_iter()
            .enumerate()
            .map(|(i, file)| FormPart::File {
                name: format!("file{i}"),
                file_name: file.file_name,
                content_type: file.content_type,
                bytes: file.bytes,
            })
            .collect();
        if let Some(story_id) = story_id {
            parts.push(FormPart::Text {
                name: "story_id".to_string(),
                value: story_id.to_string(),
            });
        }

        tracing::debug!("Uploading {} file part(s)", parts.len());
        self.post_multipart("/files", parts)
    }

    pub fn get_file(&self, file_id: i64) -> Result<File> {
        self.get(&resource_path("files", file_id))
    }

    /// Renames or re-describes an uploaded file; the content cannot change
    pub fn update_file(&self, file_id: i64, input: &UpdateFileInput) -> Result<File> {
        self.put(&resource_path("files", file_id), input)
    }

    pub fn delete_file(&self, file_id: i64) -> Result<()> {
        self.delete(&resource_path("files", file_id))
    }

    // ==================== LINKED FILES ====================

    pub fn list_linked_files(&self) -> Result<Vec<LinkedFile>> {
        self.get("/linked-files")
    }

    pub fn get_linked_file(&self, linked_file_id: i64) -> Result<LinkedFile> {
        self.get(&resource_path("linked-files", linked_file_id))
    }

    /// Attaches an externally hosted file by URL
    pub fn create_linked_file(&self, input: &CreateLinkedFileInput) -> Result<LinkedFile> {
        self.post("/linked-files", input)
    }

    pub fn update_linked_file(&self, linked_file_id: i64, input: &UpdateLinkedFileInput) -> Result<LinkedFile> {
        self.put(&resource_path("linked-files", linked_file_id), input)
    }

    pub fn delete_linked_file(&self, linked_file_id: i64) -> Result<()> {
        self.delete(&resource_path("linked-files", linked_file_id))
    }
}
