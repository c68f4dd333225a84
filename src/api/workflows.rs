use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::Workflow;

impl ShortcutClient {
    /// Story workflows with their states
    pub fn list_workflows(&self) -> Result<Vec<Workflow>> {
        self.get("/workflows")
    }

    pub fn get_workflow(&self, workflow_id: i64) -> Result<Workflow> {
        self.get(&resource_path("workflows", workflow_id))
    }
}
