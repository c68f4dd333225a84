//! Entity (story) templates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::datetime;

/// A saved story template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTemplate {
    pub id: Uuid,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,

    /// Story attributes the template pre-fills, as the API sends them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_contents: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /entity-templates`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateEntityTemplateInput {
    pub name: String,

    /// Story attributes to pre-fill, e.g. `{"story_type": "bug"}`
    pub story_contents: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
}

impl CreateEntityTemplateInput {
    pub fn new(name: impl Into<String>, story_contents: Value) -> Self {
        Self {
            name: name.into(),
            story_contents,
            author_id: None,
        }
    }
}

/// Body of `PUT /entity-templates/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateEntityTemplateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_contents: Option<Value>,
}

/// Body of `POST /stories/from-template`. Fields set here override the
/// template's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStoryFromTemplateInput {
    pub story_template_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<Vec<Uuid>>,
}

impl CreateStoryFromTemplateInput {
    pub fn new(story_template_id: Uuid) -> Self {
        Self {
            story_template_id,
            name: None,
            description: None,
            workflow_state_id: None,
            epic_id: None,
            iteration_id: None,
            group_id: None,
            owner_ids: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_workflow_state_id(mut self, workflow_state_id: i64) -> Self {
        self.workflow_state_id = Some(workflow_state_id);
        self
    }
}
