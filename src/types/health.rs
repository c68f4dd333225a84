//! Epic health updates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::datetime;

string_enum! {
    HealthStatus {
        OnTrack => "On Track",
        AtRisk => "At Risk",
        OffTrack => "Off Track",
        NoHealth => "No Health",
    }
}

/// A health status posted on an epic or objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HealthStatus>,

    /// Free-form note attached to the status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /epics/{id}/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateHealthInput {
    pub status: HealthStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CreateHealthInput {
    pub fn new(status: HealthStatus) -> Self {
        Self { status, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Body of `PUT /health/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateHealthInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HealthStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
