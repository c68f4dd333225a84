//! Group (team) types. Groups are identified by UUID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,

    /// Handle used for `@mentions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_key: Option<String>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub member_ids: Vec<Uuid>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub workflow_ids: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_stories: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_stories_started: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_epics_started: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /groups`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGroupInput {
    pub name: String,
    pub mention_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_ids: Option<Vec<i64>>,
}

impl CreateGroupInput {
    pub fn new(name: impl Into<String>, mention_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mention_name: mention_name.into(),
            ..Default::default()
        }
    }

    pub fn with_member_ids(mut self, member_ids: Vec<Uuid>) -> Self {
        self.member_ids = Some(member_ids);
        self
    }
}

/// Body of `PUT /groups/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateGroupInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<Uuid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_ids: Option<Vec<i64>>,
}
