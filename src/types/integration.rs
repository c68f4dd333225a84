//! Generic webhook integrations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::datetime;

/// An outgoing webhook registered on the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericIntegration {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /integrations/webhook`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGenericIntegrationInput {
    pub webhook_url: String,

    /// Shared secret used to sign deliveries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl CreateGenericIntegrationInput {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            secret: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}
