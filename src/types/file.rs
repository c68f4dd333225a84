//! Uploaded files and linked (externally hosted) files

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};

string_enum! {
    /// Hosting service of a linked file
    LinkedFileType {
        Google => "google",
        Url => "url",
        Dropbox => "dropbox",
        Box => "box",
        OneDrive => "onedrive",
    }
}

/// A file uploaded to Shortcut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub story_ids: Vec<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub member_mention_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub group_mention_ids: Vec<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `PUT /files/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateFileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<Uuid>,
}

/// File content for `POST /files`. Sent as multipart parts `file0`,
/// `file1`, ... in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,

    /// MIME type of the part; the server guesses when unset
    pub content_type: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A file hosted elsewhere and attached to stories by URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedFile {
    pub id: i64,
    pub name: String,
    pub url: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<LinkedFileType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub story_ids: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /linked-files`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateLinkedFileInput {
    pub name: String,
    pub url: String,

    #[serde(rename = "type")]
    pub file_type: LinkedFileType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<Uuid>,

    /// Story to attach the file to on creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,
}

impl CreateLinkedFileInput {
    pub fn new(name: impl Into<String>, url: impl Into<String>, file_type: LinkedFileType) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            file_type,
            description: None,
            content_type: None,
            size: None,
            thumbnail_url: None,
            uploader_id: None,
            story_id: None,
        }
    }

    pub fn with_story_id(mut self, story_id: i64) -> Self {
        self.story_id = Some(story_id);
        self
    }
}

/// Body of `PUT /linked-files/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateLinkedFileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<LinkedFileType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,
}
