//! Epics, their threaded comments, docs and health updates

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use crate::api::description_query;
use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{
    CreateEpicInput, CreateHealthInput, CreateStoryCommentInput, DocSlim, Epic, EpicPage, EpicWorkflow, Health,
    Story, ThreadedComment, UpdateEpicInput, UpdateHealthInput, UpdateStoryCommentInput,
};

impl ShortcutClient {
    /// All epics, without descriptions
    pub fn list_epics(&self) -> Result<Vec<Epic>> {
        self.get("/epics")
    }

    /// One page of epics
    ///
    /// # API endpoint
    ///
    /// `GET /epics/paginated`
    ///
    /// # Arguments
    ///
    /// - `page`: 1-based page number; the server starts at the first page when `None`
    /// - `page_size`: epics per page; the server default applies when `None`
    /// - `includes_description`: whether epic descriptions are sent
    ///
    /// # Returns
    ///
    /// - `Ok(EpicPage)`: the page, with `next` set while more pages follow
    pub fn list_epics_paginated(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        includes_description: Option<bool>,
    ) -> Result<EpicPage> {
        let mut query = description_query(includes_description);
        if let Some(page) = page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size".to_string(), page_size.to_string()));
        }
        self.get_query("/epics/paginated", query)
    }

    pub fn get_epic(&self, epic_id: i64) -> Result<Epic> {
        self.get(&resource_path("epics", epic_id))
    }

    pub fn create_epic(&self, input: &CreateEpicInput) -> Result<Epic> {
        self.post("/epics", input)
    }

    /// Only fields set on `input` are sent
    pub fn update_epic(&self, epic_id: i64, input: &UpdateEpicInput) -> Result<Epic> {
        self.put(&resource_path("epics", epic_id), input)
    }

    /// Deletes an epic. Its stories are kept and lose the epic link.
    pub fn delete_epic(&self, epic_id: i64) -> Result<()> {
        self.delete(&resource_path("epics", epic_id))
    }

    /// Stories in an epic. Descriptions are left out unless asked for.
    pub fn list_epic_stories(&self, epic_id: i64, includes_description: Option<bool>) -> Result<Vec<Story>> {
        let path = format!("{}/stories", resource_path("epics", epic_id));
        self.get_query(&path, description_query(includes_description))
    }

    /// The workspace's epic workflow and its states
    pub fn get_epic_workflow(&self) -> Result<EpicWorkflow> {
        self.get("/epic-workflow")
    }

    /// Removes the Productboard link of an epic synced from Productboard
    pub fn unlink_productboard_from_epic(&self, epic_id: i64) -> Result<()> {
        let path = format!("{}/unlink-productboard", resource_path("epics", epic_id));
        self.send_unit(Method::POST, &path, None::<&Value>)
    }

    // ==================== COMMENTS ====================

    /// Top-level comments of an epic, each with its replies nested
    pub fn list_epic_comments(&self, epic_id: i64) -> Result<Vec<ThreadedComment>> {
        self.get(&epic_comments_path(epic_id))
    }

    /// One epic comment with its replies
    pub fn get_epic_comment(&self, epic_id: i64, comment_id: i64) -> Result<ThreadedComment> {
        self.get(&epic_comment_path(epic_id, comment_id))
    }

    /// Starts a new top-level comment thread on an epic
    pub fn create_epic_comment(&self, epic_id: i64, input: &CreateStoryCommentInput) -> Result<ThreadedComment> {
        self.post(&epic_comments_path(epic_id), input)
    }

    /// Replies to an epic comment
    ///
    /// # API endpoint
    ///
    /// `POST /epics/{epic_id}/comments/{comment_id}`
    ///
    /// # Arguments
    ///
    /// - `comment_id`: comment being answered; the reply lands in its `comments`
    /// - `input`: reply text. `parent_id` is ignored here, the path decides the thread
    pub fn create_epic_comment_reply(
        &self,
        epic_id: i64,
        comment_id: i64,
        input: &CreateStoryCommentInput,
    ) -> Result<ThreadedComment> {
        self.post(&epic_comment_path(epic_id, comment_id), input)
    }

    pub fn update_epic_comment(
        &self,
        epic_id: i64,
        comment_id: i64,
        input: &UpdateStoryCommentInput,
    ) -> Result<ThreadedComment> {
        self.put(&epic_comment_path(epic_id, comment_id), input)
    }

    pub fn delete_epic_comment(&self, epic_id: i64, comment_id: i64) -> Result<()> {
        self.delete(&epic_comment_path(epic_id, comment_id))
    }

    // ==================== DOCS ====================

    /// Docs linked to an epic. See [`ShortcutClient::link_document_to_epic`].
    pub fn list_epic_documents(&self, epic_id: i64) -> Result<Vec<DocSlim>> {
        self.get(&format!("{}/documents", resource_path("epics", epic_id)))
    }

    // ==================== HEALTH ====================

    /// Latest health status of an epic
    pub fn get_epic_health(&self, epic_id: i64) -> Result<Health> {
        self.get(&format!("{}/health", resource_path("epics", epic_id)))
    }

    /// Posts a new health status; earlier ones move to the history
    pub fn create_epic_health(&self, epic_id: i64, input: &CreateHealthInput) -> Result<Health> {
        self.post(&format!("{}/health", resource_path("epics", epic_id)), input)
    }

    /// Every health status posted on an epic, newest first
    pub fn list_epic_health_history(&self, epic_id: i64) -> Result<Vec<Health>> {
        self.get(&format!("{}/health-history", resource_path("epics", epic_id)))
    }

    /// Edits a posted health status. Health ids are UUIDs, unlike epic ids.
    pub fn update_health(&self, health_id: Uuid, input: &UpdateHealthInput) -> Result<Health> {
        self.put(&resource_path("health", health_id), input)
    }
}

fn epic_comments_path(epic_id: i64) -> String {
    format!("{}/comments", resource_path("epics", epic_id))
}

fn epic_comment_path(epic_id: i64, comment_id: i64) -> String {
    format!("{}/{}", epic_comments_path(epic_id), comment_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epic_comment_paths() {
        assert_eq!(epic_comments_path(7), "/epics/7/comments");
        assert_eq!(epic_comment_path(7, 70), "/epics/7/comments/70");
    }
}
