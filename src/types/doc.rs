//! Docs (the `/documents` endpoints)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::datetime;

string_enum! {
    /// Format of doc content, both when writing and when reading back
    DocContentFormat {
        Markdown => "markdown",
        Html => "html",
    }
}

/// A doc with its content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_markdown: Option<String>,

    /// Only sent when requested with [`DocContentFormat::Html`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Doc summary returned by listings, searches and creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSlim {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
}

/// Body of `POST /documents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDocInput {
    pub title: String,
    pub content: String,

    /// Defaults to HTML on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<DocContentFormat>,
}

impl CreateDocInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            content_format: None,
        }
    }

    pub fn markdown(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(title, content).with_content_format(DocContentFormat::Markdown)
    }

    pub fn with_content_format(mut self, content_format: DocContentFormat) -> Self {
        self.content_format = Some(content_format);
        self
    }
}

/// Body of `PUT /documents/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDocInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<DocContentFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    #[test]
    fn test_create_doc_input() {
        assert_eq!(
            serde_json::to_value(CreateDocInput::new("Notes", "<h1>Hi</h1>")).unwrap(),
            json!({"title": "Notes", "content": "<h1>Hi</h1>"})
        );
        assert_eq!(
            serde_json::to_value(CreateDocInput::markdown("Notes", "# Hi")).unwrap(),
            json!({"title": "Notes", "content": "# Hi", "content_format": "markdown"})
        );
    }

    #[test]
    fn test_full_doc_reads_as_slim() {
        let body = json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "title": "Test Document",
            "content_markdown": "# Hello",
            "archived": false,
            "created_at": "2024-01-15T10:30:00Z"
        });
        let doc = Doc::from_json(body.clone()).unwrap();
        let slim = DocSlim::from_json(body).unwrap();
        assert_eq!(doc.id, slim.id);
        assert_eq!(doc.content_markdown.as_deref(), Some("# Hello"));
        assert_eq!(slim.title.as_deref(), Some("Test Document"));
    }
}
