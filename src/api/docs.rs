//! Docs and their epic links

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateDocInput, Doc, DocContentFormat, DocSlim, Epic, UpdateDocInput};

impl ShortcutClient {
    /// Summaries of every doc the token can read
    pub fn list_docs(&self) -> Result<Vec<DocSlim>> {
        self.get("/documents")
    }

    /// Fetches a doc with its content
    ///
    /// # API endpoint
    ///
    /// `GET /documents/{doc_id}`
    ///
    /// # Arguments
    ///
    /// - `doc_id`: UUID of the doc
    /// - `content_format`: [`DocContentFormat::Html`] also fills
    ///   `content_html`; `None` returns markdown only
    pub fn get_doc(&self, doc_id: Uuid, content_format: Option<DocContentFormat>) -> Result<Doc> {
        let query = content_format
            .map(|format| vec![("content_format".to_string(), format.to_string())])
            .unwrap_or_default();
        self.get_query(&resource_path("documents", doc_id), query)
    }

    /// Creates a doc. The answer is a summary; fetch the doc for its content.
    pub fn create_doc(&self, input: &CreateDocInput) -> Result<DocSlim> {
        let doc: DocSlim = self.post("/documents", input)?;
        tracing::debug!("Created doc {}", doc.id);
        Ok(doc)
    }

    /// Replaces title or content. `content_format` tells how `content` is read.
    pub fn update_doc(&self, doc_id: Uuid, input: &UpdateDocInput) -> Result<Doc> {
        self.put(&resource_path("documents", doc_id), input)
    }

    pub fn delete_doc(&self, doc_id: Uuid) -> Result<()> {
        self.delete(&resource_path("documents", doc_id))
    }

    // ==================== EPIC LINKS ====================

    /// Epics a doc is linked to
    pub fn list_document_epics(&self, doc_id: Uuid) -> Result<Vec<Epic>> {
        self.get(&doc_epics_path(doc_id))
    }

    /// Links a doc to an epic. Linking twice is not an error.
    pub fn link_document_to_epic(&self, doc_id: Uuid, epic_id: i64) -> Result<()> {
        self.send_unit(Method::PUT, &doc_epic_path(doc_id, epic_id), None::<&Value>)
    }

    pub fn unlink_document_from_epic(&self, doc_id: Uuid, epic_id: i64) -> Result<()> {
        self.delete(&doc_epic_path(doc_id, epic_id))
    }
}

fn doc_epics_path(doc_id: Uuid) -> String {
    format!("{}/epics", resource_path("documents", doc_id))
}

fn doc_epic_path(doc_id: Uuid, epic_id: i64) -> String {
    format!("{}/{}", doc_epics_path(doc_id), epic_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_epic_path() {
        let id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
        assert_eq!(
            doc_epic_path(id, 5),
            "/documents/123e4567-e89b-12d3-a456-426614174000/epics/5"
        );
    }
}
