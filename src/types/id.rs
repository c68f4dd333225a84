//! Resource identifiers
//!
//! Shortcut is not consistent about identifiers: stories, epics, labels and
//! most other resources use integers while members, groups and key results
//! use UUIDs. Records keep the concrete type; `ResourceId` is used where a
//! single signature has to accept either.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Uuid(Uuid),
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<Uuid> for ResourceId {
    fn from(id: Uuid) -> Self {
        Self::Uuid(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Uuid(id) => write!(f, "{}", id.hyphenated()),
        }
    }
}

/// `/{collection}/{id}`
pub(crate) fn resource_path(collection: &str, id: impl Into<ResourceId>) -> String {
    format!("/{}/{}", collection.trim_matches('/'), id.into())
}
