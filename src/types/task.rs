//! Story tasks (checklist items inside a story)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryTask {
    pub id: i64,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub owner_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub member_mention_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub group_mention_ids: Vec<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /stories/{id}/tasks`, also embedded in [`super::CreateStoryInput`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskInput {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl CreateTaskInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Body of `PUT /stories/{id}/tasks/{task_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Uuid>>,

    /// Move the task before this sibling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<i64>,

    /// Move the task after this sibling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<i64>,
}

impl UpdateTaskInput {
    pub fn complete() -> Self {
        Self {
            complete: Some(true),
            ..Default::default()
        }
    }
}
