use crate::client::ShortcutClient;
use crate::error::Result;
use crate::types::id::resource_path;
use crate::types::Repository;

impl ShortcutClient {
    /// VCS repositories connected to the workspace
    pub fn list_repositories(&self) -> Result<Vec<Repository>> {
        self.get("/repositories")
    }

    pub fn get_repository(&self, repository_id: i64) -> Result<Repository> {
        self.get(&resource_path("repositories", repository_id))
    }
}
