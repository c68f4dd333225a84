//! Milestones
//!
//! The legacy name of objectives. Workspaces that never migrated still use
//! these endpoints; records share the [`crate::types::Objective`] shape.

use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateMilestoneInput, Epic, Milestone, UpdateMilestoneInput};

impl ShortcutClient {
    pub fn list_milestones(&self) -> Result<Vec<Milestone>> {
        self.get("/milestones")
    }

    pub fn get_milestone(&self, milestone_id: i64) -> Result<Milestone> {
        self.get(&resource_path("milestones", milestone_id))
    }

    pub fn create_milestone(&self, input: &CreateMilestoneInput) -> Result<Milestone> {
        self.post("/milestones", input)
    }

    pub fn update_milestone(&self, milestone_id: i64, input: &UpdateMilestoneInput) -> Result<Milestone> {
        self.put(&resource_path("milestones", milestone_id), input)
    }

    pub fn delete_milestone(&self, milestone_id: i64) -> Result<()> {
        self.delete(&resource_path("milestones", milestone_id))
    }

    /// Epics inside a milestone
    pub fn list_milestone_epics(&self, milestone_id: i64) -> Result<Vec<Epic>> {
        self.get(&format!("{}/epics", resource_path("milestones", milestone_id)))
    }

    /// Milestones tagged with a category
    pub fn list_category_milestones(&self, category_id: i64) -> Result<Vec<Milestone>> {
        self.get(&format!("{}/milestones", resource_path("categories", category_id)))
    }
}
