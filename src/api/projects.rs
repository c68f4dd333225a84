use crate::api::description_query;
use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::{CreateProjectInput, Project, Story, UpdateProjectInput};

impl ShortcutClient {
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects")
    }

    pub fn get_project(&self, project_id: i64) -> Result<Project> {
        self.get(&resource_path("projects", project_id))
    }

    pub fn create_project(&self, input: &CreateProjectInput) -> Result<Project> {
        self.post("/projects", input)
    }

    pub fn update_project(&self, project_id: i64, input: &UpdateProjectInput) -> Result<Project> {
        self.put(&resource_path("projects", project_id), input)
    }

    /// Deletes a project. The API refuses while it still holds stories.
    pub fn delete_project(&self, project_id: i64) -> Result<()> {
        self.delete(&resource_path("projects", project_id))
    }

    /// Stories in a project. Descriptions are left out unless asked for.
    pub fn list_project_stories(&self, project_id: i64, includes_description: Option<bool>) -> Result<Vec<Story>> {
        let path = format!("{}/stories", resource_path("projects", project_id));
        self.get_query(&path, description_query(includes_description))
    }
}
