//! Workspace custom fields
//!
//! Custom fields are created in the Shortcut UI; the API can read, reorder,
//! rename, toggle and delete them, and edit their enum values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{datetime, nullable, StoryType};

/// A custom field definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: Uuid,
    pub name: String,

    /// Only `enum` exists today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_set_identifier: Option<String>,

    /// Set on built-in fields such as `priority` or `severity`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_position: Option<bool>,

    /// Story types the field applies to; empty means all
    #[serde(default, deserialize_with = "nullable::vec")]
    pub story_types: Vec<StoryType>,

    #[serde(default, deserialize_with = "nullable::vec")]
    pub values: Vec<CustomFieldEnumValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CustomField {
    /// Enabled value whose label matches `value`, ignoring case
    pub fn value_named(&self, value: &str) -> Option<&CustomFieldEnumValue> {
        self.values
            .iter()
            .filter(|v| v.enabled != Some(false))
            .find(|v| v.value.eq_ignore_ascii_case(value))
    }
}

/// One selectable value of an enum custom field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldEnumValue {
    pub id: Uuid,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// Body of `PUT /custom-fields/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCustomFieldInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_set_identifier: Option<String>,

    /// Moves the field before another one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<Uuid>,

    /// Moves the field after another one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<Uuid>,

    /// Replaces the value list. Values left out are deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<UpdateCustomFieldEnumValue>>,
}

/// Entry of [`UpdateCustomFieldInput::values`]. Without an `id` a new value
/// is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCustomFieldEnumValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl UpdateCustomFieldEnumValue {
    /// Keeps (or edits) an existing value
    pub fn existing(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Adds a new value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_color_key(mut self, color_key: impl Into<String>) -> Self {
        self.color_key = Some(color_key.into());
        self
    }
}
